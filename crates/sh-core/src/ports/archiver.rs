use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait ArchiverPort: Send + Sync {
    /// Compresses every file below `source_dir` into `archive_path`.
    ///
    /// Entry names are relative to `source_dir`; the directory itself is not
    /// part of the archive. `archive_path` must not exist yet.
    async fn compress_directory(&self, source_dir: &Path, archive_path: &Path) -> Result<()>;

    /// File extension (without dot) of archives produced by this port.
    fn extension(&self) -> &str;
}
