//! Error types for two-qubit state operations

use thiserror::Error;

/// Errors that can occur during state operations
///
/// Entanglement is not represented here: it is a classification outcome of
/// the separability analysis, not a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Attempted to normalize a vector whose norm is (numerically) zero
    #[error("Cannot normalize a zero vector (norm = {norm:e})")]
    ZeroNorm { norm: f64 },

    /// Gate matrix failed the U†U = I check
    #[error("Gate matrix is not unitary: max deviation from identity {deviation:e} exceeds {tolerance:e}")]
    NotUnitary { deviation: f64, tolerance: f64 },

    /// Malformed complex input handed over by the expression parser
    #[error("Invalid amplitude at position {position}: {reason}")]
    InvalidAmplitude { position: usize, reason: String },

    /// Division by a complex number or scalar of zero modulus
    #[error("Division by zero modulus")]
    DivisionByZero,

    /// Invalid qubit index
    #[error("Invalid qubit index {index} for two-qubit state")]
    InvalidQubitIndex { index: usize },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl StateError {
    /// Create an invalid amplitude error
    pub fn invalid_amplitude(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidAmplitude {
            position,
            reason: reason.into(),
        }
    }
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
