//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the event queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The queue has been closed and no longer accepts events.
    #[error("event queue is closed")]
    Closed,
}
