//! Clipboard injection port - replaces the system clipboard content
//!
//! Used by actions to publish their result.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait ClipboardInjectionPort: Send + Sync {
    /// Replaces the clipboard content with references to `paths`.
    async fn inject_files(&self, paths: &[PathBuf]) -> Result<()>;

    /// Replaces the clipboard content with plain text.
    async fn inject_text(&self, text: &str) -> Result<()>;
}
