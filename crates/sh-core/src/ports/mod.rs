//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases,
//! actions) and infrastructure implementations. This follows Hexagonal
//! Architecture principles, allowing the classification-and-action pipeline
//! to remain independent of the OS clipboard, the filesystem and the UI
//! thread model.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port here, ask yourself three questions:
//!
//! 1. **Does this port represent a capability the pipeline consumes?**
//! 2. **Will it be depended upon by more than one use case or action?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `sh-core/ports`.
//! Otherwise, place it next to its only consumer.

mod archiver;
mod clipboard_injection;
mod data_package_factory;
pub mod errors;
mod file_manager;
mod main_thread;

pub use archiver::ArchiverPort;
pub use clipboard_injection::ClipboardInjectionPort;
pub use data_package_factory::DataPackageFactoryPort;
pub use errors::CaptureError;
pub use file_manager::FileManagerPort;
pub use main_thread::{MainThreadInvokerPort, MainThreadJob};
