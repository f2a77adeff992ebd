//! Error types for the session layer

use qbloch_gates::ParseGateError;
use qbloch_state::StateError;
use thiserror::Error;

/// Errors surfaced to the caller of a [`Session`](crate::Session) operation
///
/// Every failure leaves the session's current state and history untouched.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Rejected by the state engine (zero norm, non-unitary gate, ...)
    #[error(transparent)]
    State(#[from] StateError),

    /// Gate payload named a gate outside the standard library
    #[error(transparent)]
    UnknownGate(#[from] ParseGateError),

    /// Payload text is not valid JSON for the expected shape
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Undo requested with an empty history
    #[error("Nothing to undo")]
    NothingToUndo,
}

impl SessionError {
    /// The underlying engine error, if any
    pub fn state_error(&self) -> Option<&StateError> {
        match self {
            SessionError::State(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
