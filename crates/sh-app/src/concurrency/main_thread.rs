use anyhow::{Context, Result};
use tokio::sync::oneshot;

use sh_core::ports::MainThreadInvokerPort;

/// Runs `f` on the main thread and hands its return value back to the caller.
///
/// The calling task is suspended until the marshaled call has completed.
pub async fn invoke_on_main_thread<R, F>(invoker: &dyn MainThreadInvokerPort, f: F) -> Result<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    invoker
        .invoke(Box::new(move || {
            let _ = tx.send(f());
        }))
        .await?;

    rx.await
        .context("main thread job finished without producing a result")
}
