mod common;
mod snapshot;
mod system;

pub use snapshot::{classify_snapshot, file_uri_to_path, RawClipboardSnapshot, RawImage};
pub use system::SystemClipboard;
