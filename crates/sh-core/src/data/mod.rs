//! Clipboard data model.
//!
//! A [`DataPackage`] is the immutable result of one clipboard capture. It
//! holds an ordered list of [`DataItem`]s, each of which declares its own
//! [`DataKind`] so that control factories and actions can dispatch on the
//! variant without probing concrete types.
mod error;
mod file;
mod item;
mod package;

pub use error::DataError;
pub use file::{FileCollectionData, FileData};
pub use item::{CustomData, DataItem, DataKind, ImageData, TextData};
pub use package::DataPackage;
