use thiserror::Error;

/// Errors produced while resolving, suspending or resuming a process.
///
/// Every variant is surfaced to the presentation layer as a terminal
/// [`PauseEvent::Error`](crate::pause::event::PauseEvent::Error); none are retried.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PauseError {
    /// No live process matches the requested name.
    #[error("Process '{0}' not found")]
    NotFound(String),

    /// The OS refused suspend/resume access to the process.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The native suspend or resume primitive reported failure.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// The request was rejected before any process was touched.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A session is already suspending a process.
    #[error("A pause session is already active")]
    SessionActive,

    /// The background tracking task could not be joined.
    #[error("Thread error: {0}")]
    Thread(String),
}

impl From<tokio::task::JoinError> for PauseError {
    fn from(err: tokio::task::JoinError) -> Self {
        PauseError::Thread(format!("{:?}", err))
    }
}
