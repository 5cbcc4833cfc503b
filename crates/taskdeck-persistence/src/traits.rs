use async_trait::async_trait;
use taskdeck_core::TaskdeckResult;

/// Trait for abstract key-value storage operations.
///
/// Models the durable local storage the workspace persists into: values are
/// opaque byte blobs addressed by string key. Implementations handle the
/// actual backend (files, memory, a browser bridge, etc.).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key, if any.
    async fn get(&self, key: &str) -> TaskdeckResult<Option<Vec<u8>>>;

    /// Write a value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> TaskdeckResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> TaskdeckResult<()>;

    /// Remove every key in the store.
    async fn clear(&self) -> TaskdeckResult<()>;
}

/// Trait for serialization/deserialization strategies.
/// Allows swapping JSON for other encodings without touching callers.
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> TaskdeckResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> TaskdeckResult<T>;
}
