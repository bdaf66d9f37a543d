use anyhow::Result;
use async_trait::async_trait;

/// Unit of work marshaled onto the main thread.
pub type MainThreadJob = Box<dyn FnOnce() + Send + 'static>;

/// Runs work on the single designated (UI-affine) thread.
#[async_trait]
pub trait MainThreadInvokerPort: Send + Sync {
    /// Runs `job` on the main thread and resolves once it has finished.
    ///
    /// Concurrent invocations are serialized by the main thread itself;
    /// no additional locking is involved.
    async fn invoke(&self, job: MainThreadJob) -> Result<()>;
}
