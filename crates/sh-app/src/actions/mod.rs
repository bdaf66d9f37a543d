//! Built-in actions and the order-ranked action registry.
mod copy_file_paths;
mod registry;
mod zip_files;

pub use copy_file_paths::CopyFilePathsAction;
pub use registry::ActionRegistry;
pub use zip_files::ZipFilesAction;

use sh_core::data::{DataItem, DataPackage};

use crate::concurrency::filter_async;

/// Items the file-based actions operate on.
pub(crate) fn is_file_item(item: &DataItem) -> bool {
    matches!(item, DataItem::File(_) | DataItem::FileCollection(_))
}

/// File-bearing items of `package`, in package order.
///
/// Both applicability and execution of the file actions go through this.
pub(crate) async fn supported_file_items(package: &DataPackage) -> Vec<&DataItem> {
    filter_async(package.items(), |item| async move { is_file_item(item) }).await
}
