use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clipboard_rs::ClipboardContext;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use sh_core::data::DataPackage;
use sh_core::ports::{CaptureError, ClipboardInjectionPort, DataPackageFactoryPort};

use super::common;
use super::snapshot::classify_snapshot;

/// The OS clipboard, used both as capture source and as injection target.
#[derive(Clone)]
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(create_context()?)),
        })
    }

    fn with_context<R>(&self, f: impl FnOnce(&ClipboardContext) -> Result<R>) -> Result<R> {
        let ctx = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        f(&ctx)
    }

    async fn run_blocking<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&ClipboardContext) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let this = self.clone();
        spawn_blocking(move || this.with_context(f))
            .await
            .context("clipboard task failed to complete")?
    }
}

#[cfg(target_os = "linux")]
fn create_context() -> Result<ClipboardContext> {
    use clipboard_rs::ClipboardContextX11Options;

    ClipboardContext::new_with_options(ClipboardContextX11Options { read_timeout: None })
        .map_err(|e| anyhow!(e))
        .context("ClipboardContext::new_with_options failed")
}

#[cfg(not(target_os = "linux"))]
fn create_context() -> Result<ClipboardContext> {
    ClipboardContext::new()
        .map_err(|e| anyhow!(e))
        .context("ClipboardContext::new failed")
}

#[async_trait]
impl DataPackageFactoryPort for SystemClipboard {
    async fn create_from_current_clipboard(&self) -> Result<DataPackage, CaptureError> {
        let snapshot = self.run_blocking(common::read_snapshot).await?;
        debug!(
            files = snapshot.files.len(),
            has_image = snapshot.image.is_some(),
            has_text = snapshot.text.is_some(),
            "Read clipboard snapshot"
        );

        // existence checks stat every path
        spawn_blocking(move || classify_snapshot(snapshot, Path::exists))
            .await
            .context("clipboard classification task failed to complete")?
    }
}

#[async_trait]
impl ClipboardInjectionPort for SystemClipboard {
    async fn inject_files(&self, paths: &[PathBuf]) -> Result<()> {
        let paths = paths.to_vec();
        let count = paths.len();
        self.run_blocking(move |ctx| common::write_files(ctx, &paths))
            .await?;
        info!(count, "Injected files into clipboard");
        Ok(())
    }

    async fn inject_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        let len = text.len();
        self.run_blocking(move |ctx| common::write_text(ctx, &text))
            .await?;
        info!(len, "Injected text into clipboard");
        Ok(())
    }
}
