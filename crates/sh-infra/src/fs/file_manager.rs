use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

use sh_core::ports::FileManagerPort;

use super::find_common_folder;

/// [`FileManagerPort`] backed by the local filesystem.
///
/// Temporary folders live directly under `temporary_root`
/// (e.g. `<root>/<name>`).
pub struct FsFileManager {
    temporary_root: PathBuf,
}

impl FsFileManager {
    /// Create a file manager staging temporary folders under `temporary_root`.
    ///
    /// The root itself is created lazily by the first
    /// `prepare_temporary_folder` call.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// let manager = sh_infra::fs::FsFileManager::new(PathBuf::from("/tmp/Shapeshifter"));
    /// assert_eq!(manager.temporary_root(), PathBuf::from("/tmp/Shapeshifter").as_path());
    /// ```
    pub fn new(temporary_root: PathBuf) -> Self {
        Self { temporary_root }
    }

    pub fn temporary_root(&self) -> &Path {
        &self.temporary_root
    }
}

/// Temporary folder names must stay inside the root: exactly one normal component.
fn validate_folder_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("invalid temporary folder name: {name:?}"),
    }
}

#[async_trait]
impl FileManagerPort for FsFileManager {
    fn find_common_folder_from_paths(&self, paths: &[PathBuf]) -> PathBuf {
        find_common_folder(paths)
    }

    /// Removes whatever sits at `<root>/<name>` (folder or file) and creates
    /// an empty folder in its place.
    async fn prepare_temporary_folder(&self, name: &str) -> Result<PathBuf> {
        validate_folder_name(name)?;
        let path = self.temporary_root.join(name);

        match fs::symlink_metadata(&path).await {
            Ok(meta) if meta.is_dir() => {
                debug!(path = %path.display(), "Clearing existing temporary folder");
                fs::remove_dir_all(&path)
                    .await
                    .with_context(|| format!("Failed to clear {}", path.display()))?;
            }
            Ok(_) => {
                fs::remove_file(&path)
                    .await
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to inspect {}", path.display()))
            }
        }

        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(path)
    }

    async fn delete_file_if_exists(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Deleted pre-existing file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
        }
    }

    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<()> {
        fs::copy(source, destination).await.with_context(|| {
            format!(
                "Failed to copy {} to {}",
                source.display(),
                destination.display()
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_names_must_be_a_single_component() {
        assert!(validate_folder_name("src").is_ok());
        assert!(validate_folder_name("Compressed folders").is_ok());
        assert!(validate_folder_name("").is_err());
        assert!(validate_folder_name("..").is_err());
        assert!(validate_folder_name("a/b").is_err());
        assert!(validate_folder_name("/abs").is_err());
    }
}
