mod common_folder;
mod file_manager;

pub use common_folder::find_common_folder;
pub use file_manager::FsFileManager;
