use std::io::Write;
use std::path::{Path, PathBuf};
use taskdeck_core::{TaskdeckError, TaskdeckResult};

/// Crash-safe file writer.
///
/// A value is written to a temp file in the target directory and then
/// persisted over the destination in one rename, so readers only ever see
/// the old bytes or the new bytes, never a torn write.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TaskdeckResult<()> {
        let target: PathBuf = path.to_path_buf();
        let data = data.to_vec();
        let written = data.len();

        tokio::task::spawn_blocking(move || -> TaskdeckResult<()> {
            // Temp file must live next to the target so the rename stays on
            // one filesystem.
            let parent = target.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(parent)?;
            let mut temp = tempfile::NamedTempFile::new_in(parent)?;
            temp.write_all(&data)?;
            temp.flush()?;
            temp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| TaskdeckError::Internal(format!("atomic write task failed: {e}")))??;

        tracing::debug!("Atomically wrote {} bytes to {}", written, path.display());
        Ok(())
    }

    pub async fn read_all(path: &Path) -> TaskdeckResult<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
