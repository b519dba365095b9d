//! One-shot render worker.
//!
//! [`run_on_worker`] hands exactly one generation job to exactly one
//! worker thread and blocks the caller until the worker either delivers
//! its text or dies. The worker builds and owns the output locally, then
//! *moves* the finished `String` across a one-shot channel. The caller
//! never observes a partially written buffer, because the only thing that
//! crosses the boundary is a completed value.
//!
//! The channel send happens-before the caller's `recv` returns, so the
//! worker's writes are visible to the caller without any shared mutable
//! state.
//!
//! Limitations, kept on purpose: there is no timeout and no cancellation.
//! A job that never finishes blocks its caller forever.

use std::sync::mpsc;
use std::thread;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The operating system refused to spawn the worker thread.
    #[error("failed to spawn render worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// The worker terminated (panicked) before delivering its output.
    /// Generation is deterministic, so the failure is reported as-is and
    /// never retried.
    #[error("render worker terminated before delivering its output")]
    WorkerFailed,
}

/// Run `job` on a dedicated worker thread and block until it completes.
///
/// The job executes exactly once. On success the worker's text is moved
/// to the caller; a worker panic surfaces as
/// [`CoordinatorError::WorkerFailed`], never as a placeholder value.
pub fn run_on_worker<F>(job: F) -> Result<String, CoordinatorError>
where
    F: FnOnce() -> String + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let worker = thread::Builder::new()
        .name("glyphforge-render".to_string())
        .spawn(move || {
            let art = job();
            // A send can only fail if the caller is gone; there is no one
            // left to deliver to, so the result is dropped with the thread.
            let _ = tx.send(art);
        })?;

    // Blocks until the worker has committed its result (or died, which
    // drops the sender and wakes us with an error).
    let art = rx.recv();
    let joined = worker.join();

    match (art, joined) {
        (Ok(art), Ok(())) => Ok(art),
        _ => Err(CoordinatorError::WorkerFailed),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
