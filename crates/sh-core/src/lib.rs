//! # sh-core
//!
//! Core domain models and port interfaces for Shapeshift.
//!
//! This crate contains pure business types without any infrastructure
//! dependencies: the clipboard data model, the control and action
//! abstractions, and the ports implemented by the infra/platform layers.

pub mod action;
pub mod config;
pub mod control;
pub mod data;
pub mod ports;

// Re-export commonly used types at the crate root
pub use action::{Action, ActionError};
pub use config::AppConfig;
pub use control::{ControlFactory, ControlModel, DataControlPackage};
pub use data::{
    CustomData, DataError, DataItem, DataKind, DataPackage, FileCollectionData, FileData,
    ImageData, TextData,
};
