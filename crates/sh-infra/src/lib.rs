pub mod archive;
pub mod fs;
pub mod runtime;

pub use archive::ZipArchiver;
pub use fs::FsFileManager;
pub use runtime::{MainThreadDispatcher, MainThreadInvoker, MainThreadLoop};
