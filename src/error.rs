//! Error types for the chat overlay.

use thiserror::Error;

/// Common error type for the chat overlay.
///
/// User-facing command problems (bad `/me` usage, unknown commands) are not
/// errors here; they end up as informational records in the channel log.
#[derive(Error, Debug)]
pub enum ChatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker context has shut down and no longer accepts jobs.
    #[error("worker context has stopped")]
    WorkerStopped,

    /// No channel with the given ID exists on the worker.
    #[error("channel {0} not found")]
    ChannelNotFound(u64),
}

/// Result type alias for chat overlay operations.
pub type Result<T> = std::result::Result<T, ChatError>;
