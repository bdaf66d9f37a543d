//! Built-in control factories and the priority-ordered registry.
mod file_control;
mod image_control;
mod registry;
mod text_control;

pub use file_control::{FileControlFactory, FileEntryView, FileListControl};
pub use image_control::{ImageControl, ImageControlFactory};
pub use registry::ControlFactoryRegistry;
pub use text_control::{TextControl, TextControlFactory};
