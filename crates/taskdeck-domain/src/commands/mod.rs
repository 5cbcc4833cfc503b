use taskdeck_core::TaskdeckResult;

pub mod board_commands;
pub mod column_commands;
pub mod task_commands;

pub use board_commands::*;
pub use column_commands::*;
pub use task_commands::*;

use crate::board::{Board, BoardId};
use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId};

/// Trait for domain commands that mutate state
/// Commands represent intent and can be executed, queued, and persisted
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub boards: &'a mut Vec<Board>,
}

impl CommandContext<'_> {
    pub fn find_board_mut(&mut self, board_id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == board_id)
    }

    pub fn find_column_mut(&mut self, column_id: ColumnId) -> Option<&mut Column> {
        self.boards
            .iter_mut()
            .find_map(|b| b.find_column_mut(column_id))
    }

    pub fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.boards.iter_mut().find_map(|b| b.find_task_mut(task_id))
    }

    pub fn column_exists(&self, column_id: ColumnId) -> bool {
        self.boards
            .iter()
            .any(|b| b.find_column(column_id).is_some())
    }
}
