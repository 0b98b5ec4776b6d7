//! Session error taxonomy
//!
//! All domain failures are recoverable, locally reported conditions.
//! Callers branch on the `Result`; nothing here is ever a panic path.

use thiserror::Error;

/// Result alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Domain errors surfaced by the lifecycle and order services
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Unknown session code
    #[error("Session not found")]
    NotFound,

    /// Session has been closed; closed is terminal
    #[error("Session is no longer active")]
    Inactive,

    /// Non-creator attempted a creator-only operation
    #[error("Only the session creator can close the session")]
    Forbidden,

    /// Caller is not a member of the session
    #[error("User not found in session")]
    UserNotFound,

    /// Batch order referenced an unresolvable catalog id
    #[error("Drink with ID {0} not found")]
    DrinkNotFound(String),
}
