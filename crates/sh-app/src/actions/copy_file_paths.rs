use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use sh_core::action::{Action, ActionError};
use sh_core::data::DataPackage;
use sh_core::ports::ClipboardInjectionPort;

use super::supported_file_items;

const TITLE: &str = "Copy file paths";
const ORDER: u8 = 50;

/// Replaces the clipboard with the full paths of the first file-bearing item,
/// one path per line.
pub struct CopyFilePathsAction {
    clipboard: Arc<dyn ClipboardInjectionPort>,
}

impl CopyFilePathsAction {
    pub fn new(clipboard: Arc<dyn ClipboardInjectionPort>) -> Self {
        Self { clipboard }
    }
}

#[async_trait]
impl Action for CopyFilePathsAction {
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
        let span = info_span!("action.copy_file_paths.perform", items = package.len());

        async {
            let supported = supported_file_items(package).await;
            let files = supported
                .first()
                .and_then(|item| item.files())
                .ok_or_else(|| {
                    ActionError::UnexpectedState("package holds no file data".into())
                })?;
            if files.is_empty() {
                return Err(ActionError::InvalidArgument("no file paths to copy".into()));
            }

            let text = files
                .iter()
                .map(|file| file.full_path().display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            self.clipboard.inject_text(&text).await?;

            info!(count = files.len(), "File paths placed on clipboard");
            Ok::<(), ActionError>(())
        }
        .instrument(span)
        .await
    }
}
