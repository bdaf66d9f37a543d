//! # sh-platform
//!
//! OS clipboard adapters: capture and classification of the current
//! clipboard content, and injection of action results.

pub mod clipboard;

pub use clipboard::{classify_snapshot, RawClipboardSnapshot, RawImage, SystemClipboard};
