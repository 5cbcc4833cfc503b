use crate::traits::Serializer;
use taskdeck_core::{TaskdeckError, TaskdeckResult};

/// JSON serializer for domain models.
///
/// Pretty-printed so the stored state stays inspectable by hand.
#[derive(Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> TaskdeckResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| TaskdeckError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> TaskdeckResult<T> {
        serde_json::from_slice(bytes).map_err(|e| TaskdeckError::Serialization(e.to_string()))
    }
}
