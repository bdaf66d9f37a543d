use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Filesystem operations used by actions that stage temporary files.
#[async_trait]
pub trait FileManagerPort: Send + Sync {
    /// Deepest directory shared by the parent folders of all `paths`.
    ///
    /// Comparison is per path component, never per character. Returns the
    /// filesystem root when only the root is shared and an empty path when
    /// nothing is shared at all.
    fn find_common_folder_from_paths(&self, paths: &[PathBuf]) -> PathBuf;

    /// Returns `<temporary root>/<name>` as an existing, empty folder.
    ///
    /// Anything previously at that location is removed first, so calling
    /// this twice with the same name never leaks earlier contents.
    async fn prepare_temporary_folder(&self, name: &str) -> Result<PathBuf>;

    /// Deletes `path` if it exists; no-op otherwise.
    async fn delete_file_if_exists(&self, path: &Path) -> Result<()>;

    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<()>;
}

#[async_trait]
impl<T: FileManagerPort + ?Sized> FileManagerPort for Arc<T> {
    fn find_common_folder_from_paths(&self, paths: &[PathBuf]) -> PathBuf {
        (**self).find_common_folder_from_paths(paths)
    }

    async fn prepare_temporary_folder(&self, name: &str) -> Result<PathBuf> {
        (**self).prepare_temporary_folder(name).await
    }

    async fn delete_file_if_exists(&self, path: &Path) -> Result<()> {
        (**self).delete_file_if_exists(path).await
    }

    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<()> {
        (**self).copy_file(source, destination).await
    }
}
