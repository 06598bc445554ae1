//! Single-consumer job queue owning a piece of state

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

type Job<S> = Box<dyn FnOnce(&mut S) + Send>;

/// The queue task has stopped and no longer accepts jobs
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("main queue is closed")]
pub struct QueueClosed;

/// Handle to a task that runs jobs against its state in FIFO order
///
/// Cloning the handle shares the same queue. The task exits once every handle
/// is dropped, dropping the state with it.
pub struct MainQueue<S> {
    tx: mpsc::UnboundedSender<Job<S>>,
}

impl<S> Clone for MainQueue<S> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<S: Send + 'static> MainQueue<S> {
    /// Move `state` onto a new queue task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut state: S) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job<S>>();
        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                job(&mut state);
            }
            debug!(event = "main_queue_stopped", "Main queue drained, state dropped");
        });
        Self { tx }
    }

    /// Enqueue a job without waiting for it; returns false if the queue is gone
    pub fn post<F>(&self, job: F) -> bool
    where
        F: FnOnce(&mut S) + Send + 'static,
    {
        self.tx.send(Box::new(job)).is_ok()
    }

    /// Enqueue a job and wait for its return value
    pub async fn call<F, R>(&self, f: F) -> Result<R, QueueClosed>
    where
        F: FnOnce(&mut S) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let posted = self.post(move |state| {
            let _ = tx.send(f(state));
        });
        if !posted {
            return Err(QueueClosed);
        }
        rx.await.map_err(|_| QueueClosed)
    }
}
