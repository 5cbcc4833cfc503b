use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use std::path::{Path, PathBuf};
use taskdeck_core::TaskdeckResult;

/// Directory-backed key-value store.
///
/// Each key maps to one file under the store directory; writes go through
/// `AtomicWriter` so a crash never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a key. Key characters outside `[A-Za-z0-9._-]` are
    /// replaced so a key can never escape the store directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(file_name)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> TaskdeckResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match AtomicWriter::read_all(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(taskdeck_core::TaskdeckError::Io(e))
                if e.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> TaskdeckResult<()> {
        let path = self.path_for(key);
        AtomicWriter::write_atomic(&path, value).await?;
        tracing::debug!("Stored {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskdeckResult<()> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn clear(&self) -> TaskdeckResult<()> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                tokio::fs::remove_file(entry.path()).await?;
            }
        }
        Ok(())
    }
}
