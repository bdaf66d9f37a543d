//! Pluggable transformations offered against a package.
mod error;

pub use error::ActionError;

use async_trait::async_trait;

use crate::data::DataPackage;

/// A named transformation that writes its result back to the clipboard.
///
/// Implementations are stateless across invocations.
#[async_trait]
pub trait Action: Send + Sync {
    /// Presentation string.
    fn title(&self) -> &str;

    /// Presentation rank, ascending = higher precedence.
    fn order(&self) -> u8;

    /// `true` when at least one item of `package` is supported.
    async fn can_perform(&self, package: &DataPackage) -> Result<bool, ActionError>;

    /// Transforms `package` and replaces the clipboard content with the
    /// result.
    async fn perform(&self, package: &DataPackage) -> Result<(), ActionError>;
}
