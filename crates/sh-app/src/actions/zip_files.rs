use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use sh_core::action::{Action, ActionError};
use sh_core::data::{DataItem, DataPackage, FileData};
use sh_core::ports::{ArchiverPort, ClipboardInjectionPort, FileManagerPort};

use super::supported_file_items;

const TITLE: &str = "Copy as compressed folder";
const ORDER: u8 = 75;

/// Temporary folder receiving the produced archives.
const ARCHIVE_FOLDER_NAME: &str = "Compressed folders";

/// Used when the shared folder has no name of its own (root or nothing shared).
const FALLBACK_FOLDER_NAME: &str = "Files";

/// Compresses the files of the first file-bearing item into one archive and
/// puts that archive on the clipboard.
///
/// A single file item archives that one file; a file collection archives
/// every member. Later file items in the package are ignored.
pub struct ZipFilesAction {
    file_manager: Arc<dyn FileManagerPort>,
    archiver: Arc<dyn ArchiverPort>,
    clipboard: Arc<dyn ClipboardInjectionPort>,
}

impl ZipFilesAction {
    pub fn new(
        file_manager: Arc<dyn FileManagerPort>,
        archiver: Arc<dyn ArchiverPort>,
        clipboard: Arc<dyn ClipboardInjectionPort>,
    ) -> Self {
        Self {
            file_manager,
            archiver,
            clipboard,
        }
    }

    async fn zip_item(&self, item: &DataItem) -> Result<PathBuf, ActionError> {
        match item {
            DataItem::File(file) => self.zip_files(std::slice::from_ref(file)).await,
            DataItem::FileCollection(collection) => self.zip_files(collection.files()).await,
            other => Err(ActionError::UnexpectedState(format!(
                "cannot compress {} data",
                other.kind()
            ))),
        }
    }

    async fn zip_files(&self, files: &[FileData]) -> Result<PathBuf, ActionError> {
        if files.is_empty() {
            return Err(ActionError::InvalidArgument(
                "there must be at least one file to compress".into(),
            ));
        }

        let paths: Vec<PathBuf> = files.iter().map(|f| f.full_path().to_path_buf()).collect();
        let common_folder = self.file_manager.find_common_folder_from_paths(&paths);
        let folder_name = common_folder
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FOLDER_NAME.to_string());

        let staging = self.file_manager.prepare_temporary_folder(&folder_name).await?;
        self.copy_into(files, &staging).await?;

        self.compress(&staging, &folder_name).await
    }

    /// Copies files into `folder` under their leaf names; a later file with
    /// the same name replaces an earlier one.
    async fn copy_into(&self, files: &[FileData], folder: &Path) -> Result<(), ActionError> {
        for file in files {
            let destination = folder.join(file.file_name());
            self.file_manager.delete_file_if_exists(&destination).await?;
            self.file_manager
                .copy_file(file.full_path(), &destination)
                .await?;
        }
        Ok(())
    }

    async fn compress(&self, folder: &Path, name: &str) -> Result<PathBuf, ActionError> {
        let archive_folder = self
            .file_manager
            .prepare_temporary_folder(ARCHIVE_FOLDER_NAME)
            .await?;
        let archive = archive_folder.join(format!("{name}.{}", self.archiver.extension()));

        self.file_manager.delete_file_if_exists(&archive).await?;
        self.archiver.compress_directory(folder, &archive).await?;
        Ok(archive)
    }
}

#[async_trait]
impl Action for ZipFilesAction {
    fn title(&self) -> &str {
        TITLE
    }

    fn order(&self) -> u8 {
        ORDER
    }

    async fn can_perform(&self, package: &DataPackage) -> Result<bool, ActionError> {
        Ok(!supported_file_items(package).await.is_empty())
    }

    async fn perform(&self, package: &DataPackage) -> Result<(), ActionError> {
        let span = info_span!("action.zip_files.perform", items = package.len());

        async {
            // 1. Pick the first supported item
            let supported = supported_file_items(package).await;
            let item = supported.first().ok_or_else(|| {
                ActionError::UnexpectedState("package holds no file data to compress".into())
            })?;

            // 2. Stage, copy and compress
            let archive = self.zip_item(item).await?;

            // 3. Publish the archive
            self.clipboard.inject_files(&[archive.clone()]).await?;

            info!(archive = %archive.display(), "Compressed files placed on clipboard");
            Ok::<(), ActionError>(())
        }
        .instrument(span)
        .await
    }
}
