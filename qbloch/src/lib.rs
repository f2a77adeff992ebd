//! Session layer of the two-qubit Bloch sphere visualizer
//!
//! This crate sits between the display layer and the state engine. It owns
//! the current state, decodes boundary payloads, validates and applies
//! gates, performs measurements with a seedable RNG, and answers every
//! transition with a typed [`StateSnapshot`] for rendering.
//!
//! The numerical work lives in [`qbloch_state`] and [`qbloch_gates`], which
//! are re-exported for convenience.
//!
//! # Example
//!
//! ```
//! use qbloch::{Session, SessionConfig};
//!
//! let mut session = Session::with_config(SessionConfig::new().with_seed(42));
//! let json = session
//!     .apply_state_json(r#"{"vector": [{"re": 0}, {"re": 0}, {"re": 1}, {"re": 0}]}"#)
//!     .unwrap();
//! assert!(json.contains("\"is_separable\":true"));
//!
//! // CNOT with control qubit 1: |10⟩ → |11⟩
//! let snapshot = session.apply_gate(&qbloch::GateInput::named(
//!     qbloch_gates::StandardGate::Cnot10,
//! )).unwrap();
//! assert!((snapshot.probabilities[3] - 1.0).abs() < 1e-12);
//! ```
//!
//! Logging goes through `tracing`; install a subscriber in the host to see
//! state transitions (`debug`) and rejected requests (`warn`).

pub mod config;
pub mod error;
pub mod payload;
pub mod session;
pub mod snapshot;

pub use config::{SessionConfig, DEFAULT_HISTORY_LIMIT};
pub use error::{Result, SessionError};
pub use payload::{
    from_json, to_json, AlphaBetaInput, ComplexPayload, GateInput, MatrixInput, MeasureRequest,
    MeasureResponse, NamedGateInput, StateInput, VectorInput,
};
pub use session::Session;
pub use snapshot::{Qubit0Amplitudes, Qubit1Amplitudes, StateSnapshot};

pub use qbloch_gates;
pub use qbloch_state;
