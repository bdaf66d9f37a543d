//! Shapeshift Application Orchestration Layer
//!
//! This crate contains the classification-and-action pipeline: control
//! selection, main-thread marshaling, the order-preserving async filter and
//! the built-in actions.
//!
//! ```text
//! DataPackageFactoryPort ──► DataControlPackageFactory ──► DataControlPackage (UI)
//!            │                   (main thread)
//!            └──────────────► ActionRegistry ──► Action::perform ──► ClipboardInjectionPort
//! ```

pub mod actions;
pub mod concurrency;
pub mod controls;
pub mod usecases;

pub use actions::{ActionRegistry, CopyFilePathsAction, ZipFilesAction};
pub use controls::ControlFactoryRegistry;
pub use usecases::DataControlPackageFactory;
