//! Point-in-time capture of all workspace data.
//!
//! The `WorkspaceSnapshot` type is a serializable representation of the
//! whole board collection plus the board the user is looking at. It is what
//! the auto-save engine compares and what the persistence layer wraps in its
//! storage envelope. Pure data, no UI dependencies.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Point-in-time capture of all workspace data.
///
/// Fields use `#[serde(default)]` so partial snapshots from older formats
/// still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkspaceSnapshot {
    /// All boards, columns, and tasks.
    #[serde(default)]
    pub boards: Vec<Board>,

    /// The board open when the snapshot was taken, if any.
    #[serde(default)]
    pub current_board: Option<Board>,
}

impl WorkspaceSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(boards: Vec<Board>, current_board: Option<Board>) -> Self {
        Self {
            boards,
            current_board,
        }
    }

    /// Check if the snapshot is empty (no data).
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty() && self.current_board.is_none()
    }
}
