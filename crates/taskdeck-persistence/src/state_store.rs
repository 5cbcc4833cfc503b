use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use taskdeck_domain::{Board, WorkspaceSnapshot};

use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};

/// Version written into every persisted state envelope.
pub const STATE_VERSION: &str = "1.0.0";

/// Wire layout of the persisted workspace state, stored under a fixed key.
///
/// Key names are camelCase: this is the contract shared with every other
/// consumer of the stored state.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    boards: Vec<Board>,
    current_board: Option<Board>,
    last_saved: DateTime<Utc>,
    version: String,
}

/// Persists the workspace snapshot into a key-value store.
///
/// Wraps the snapshot in the versioned envelope on save and validates the
/// version on load.
#[derive(Clone)]
pub struct StateStore {
    store: Arc<dyn KeyValueStore>,
    serializer: JsonSerializer,
    key: String,
}

impl StateStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            serializer: JsonSerializer,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Save a snapshot. Returns the timestamp written into the envelope.
    pub async fn save(&self, snapshot: &WorkspaceSnapshot) -> TaskdeckResult<DateTime<Utc>> {
        let last_saved = Utc::now();
        let state = PersistedState {
            boards: snapshot.boards.clone(),
            current_board: snapshot.current_board.clone(),
            last_saved,
            version: STATE_VERSION.to_string(),
        };

        let bytes = self.serializer.serialize(&state)?;
        self.store.set(&self.key, &bytes).await?;

        tracing::info!("Saved {} bytes under '{}'", bytes.len(), self.key);
        Ok(last_saved)
    }

    /// Load the persisted snapshot, or `None` if nothing was ever saved.
    pub async fn load(&self) -> TaskdeckResult<Option<WorkspaceSnapshot>> {
        let Some(bytes) = self.store.get(&self.key).await? else {
            return Ok(None);
        };

        let state: PersistedState = self.serializer.deserialize(&bytes)?;
        if state.version != STATE_VERSION {
            return Err(TaskdeckError::Serialization(format!(
                "Unsupported state version: {}",
                state.version
            )));
        }

        tracing::info!("Loaded {} bytes from '{}'", bytes.len(), self.key);
        Ok(Some(WorkspaceSnapshot::from_data(
            state.boards,
            state.current_board,
        )))
    }

    /// Drop the persisted state.
    pub async fn reset(&self) -> TaskdeckResult<()> {
        self.store.remove(&self.key).await
    }
}
