//! Gate matrices and gate application for the two-qubit state engine
//!
//! This crate provides the constant matrices of the standard gates, the
//! matrix utilities needed to combine them, and [`GateMatrix`], a 4×4 matrix
//! validated as unitary before it is ever applied to a state.
//!
//! # Features
//!
//! - **Unitarity check up front**: a non-unitary matrix is rejected with
//!   [`StateError::NotUnitary`](qbloch_state::StateError::NotUnitary) before
//!   any state is touched
//! - **Standard gate library**: CNOT in both directions, CZ, iSWAP, SWAP and
//!   the Hadamard/Pauli lifts onto either qubit
//! - **Parameterized single-qubit gates**: RX, RY, RZ and phase matrices that
//!   can be lifted with [`GateMatrix::on_qubit`]
//!
//! # Examples
//!
//! ```
//! use qbloch_gates::{apply_gate, StandardGate, DEFAULT_UNITARY_TOLERANCE};
//! use qbloch_state::{analyze, StateVector};
//!
//! // H on qubit 1 followed by CNOT10 prepares a Bell state
//! let bell = StandardGate::HadamardQ1
//!     .gate()
//!     .compose(&StandardGate::Cnot10.gate())
//!     .apply(&StateVector::default())
//!     .unwrap();
//! assert!(!analyze(&bell).is_separable());
//!
//! // Raw matrices are validated on the way in
//! let mut scaled = StandardGate::Cz.matrix();
//! scaled[3][3] *= 2.0;
//! assert!(apply_gate(&bell, &scaled, DEFAULT_UNITARY_TOLERANCE).is_err());
//! ```

pub mod gate_matrix;
pub mod matrices;
pub mod matrix_ops;
pub mod standard;

pub use gate_matrix::{apply_gate, GateMatrix, DEFAULT_UNITARY_TOLERANCE};
pub use matrices::{Matrix2, Matrix4};
pub use standard::{ParseGateError, StandardGate};
