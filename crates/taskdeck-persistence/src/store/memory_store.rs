use crate::traits::KeyValueStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use taskdeck_core::TaskdeckResult;

/// In-memory key-value store.
///
/// Used by tests and by hosts that manage durability themselves (the
/// embedding application can drain the map into its own storage).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> TaskdeckResult<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> TaskdeckResult<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskdeckResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    async fn clear(&self) -> TaskdeckResult<()> {
        self.entries.write().clear();
        Ok(())
    }
}
