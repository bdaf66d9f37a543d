//! Single-consumer job queue bound to one designated thread.
//!
//! ```text
//! caller task ──invoke()──► mpsc queue ──► MainThreadLoop (designated thread)
//!      ▲                                        │ runs job
//!      └──────────────── oneshot "done" ◄───────┘
//! ```
//!
//! The loop executes one job at a time, so jobs from concurrent callers never
//! overlap. Their relative order is whatever order they reach the queue.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle, ThreadId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use sh_core::ports::{MainThreadInvokerPort, MainThreadJob};

struct Envelope {
    job: MainThreadJob,
    done: oneshot::Sender<()>,
}

pub struct MainThreadDispatcher;

impl MainThreadDispatcher {
    /// Creates a connected invoker/loop pair.
    ///
    /// Nothing runs until [`MainThreadLoop::run`] or [`MainThreadLoop::spawn`]
    /// is called; invocations issued before that wait in the queue.
    pub fn channel(capacity: usize) -> (MainThreadInvoker, MainThreadLoop) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let bound_thread = Arc::new(OnceLock::new());

        (
            MainThreadInvoker {
                tx,
                bound_thread: Arc::clone(&bound_thread),
            },
            MainThreadLoop { rx, bound_thread },
        )
    }
}

/// Cloneable handle that marshals jobs onto the main thread.
#[derive(Clone)]
pub struct MainThreadInvoker {
    tx: mpsc::Sender<Envelope>,
    bound_thread: Arc<OnceLock<ThreadId>>,
}

impl MainThreadInvoker {
    /// `true` when called from the thread running the loop.
    pub fn is_main_thread(&self) -> bool {
        self.bound_thread.get() == Some(&thread::current().id())
    }
}

#[async_trait]
impl MainThreadInvokerPort for MainThreadInvoker {
    async fn invoke(&self, job: MainThreadJob) -> Result<()> {
        // Already on the main thread: queueing would wait on ourselves.
        if self.is_main_thread() {
            job();
            return Ok(());
        }

        let (done, finished) = oneshot::channel();
        self.tx
            .send(Envelope { job, done })
            .await
            .map_err(|_| anyhow!("main thread loop is not running"))?;

        finished
            .await
            .map_err(|_| anyhow!("main thread job did not complete"))
    }
}

/// Receiving side of the queue; owns the designated thread while running.
pub struct MainThreadLoop {
    rx: mpsc::Receiver<Envelope>,
    bound_thread: Arc<OnceLock<ThreadId>>,
}

impl MainThreadLoop {
    /// Binds the loop to the calling thread and runs jobs until every
    /// [`MainThreadInvoker`] has been dropped.
    ///
    /// Blocks the calling thread. Must not be called from inside an async
    /// runtime.
    pub fn run(mut self) {
        let _ = self.bound_thread.set(thread::current().id());
        info!(
            thread = thread::current().name().unwrap_or("<unnamed>"),
            "Main thread loop started"
        );

        while let Some(Envelope { job, done }) = self.rx.blocking_recv() {
            match panic::catch_unwind(AssertUnwindSafe(job)) {
                Ok(()) => {
                    if done.send(()).is_err() {
                        debug!("Main thread job finished after its caller went away");
                    }
                }
                // Dropping `done` reports the failure to the caller.
                Err(_) => error!("Main thread job panicked"),
            }
        }

        info!("Main thread loop stopped");
    }

    /// Runs the loop on a new thread named `name`.
    pub fn spawn(self, name: impl Into<String>) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(name.into())
            .spawn(move || self.run())
    }
}
