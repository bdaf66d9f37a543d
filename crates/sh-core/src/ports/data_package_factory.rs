use async_trait::async_trait;

use crate::data::DataPackage;
use crate::ports::CaptureError;

/// Turns the current system clipboard into a [`DataPackage`].
#[async_trait]
pub trait DataPackageFactoryPort: Send + Sync {
    /// Captures and classifies the current clipboard content.
    ///
    /// Fails with [`CaptureError::FormatNotUnderstood`] when nothing on the
    /// clipboard maps onto a known data variant.
    async fn create_from_current_clipboard(&self) -> Result<DataPackage, CaptureError>;
}
