//! Error types for session operations.

use thiserror::Error;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a measurement session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Completion or cancellation was requested with no measurement in
    /// progress.
    #[error("no measurement in progress")]
    NoActiveMeasurement,
}
