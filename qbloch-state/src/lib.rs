//! Two-qubit quantum state engine
//!
//! This crate holds the numerical core behind the Bloch sphere visualizer:
//! conversions between the amplitude vector, the separable α/β factorization,
//! the density matrix and the reduced single-qubit Bloch vectors, plus
//! projective measurement with collapse.
//!
//! # Conventions
//!
//! Amplitudes are indexed in the basis order |00⟩, |01⟩, |10⟩, |11⟩. Qubit 1 is
//! the left tensor factor (bit 1 of the index), qubit 0 the right one (bit 0).
//! Every public constructor of [`StateVector`] normalizes its input.
//!
//! # Example
//!
//! ```
//! use qbloch_state::{analyze, reduced_bloch, StateVector};
//! use num_complex::Complex64;
//!
//! let one = Complex64::new(1.0, 0.0);
//! let state = StateVector::from_alpha_beta(one, one, one, -one).unwrap();
//!
//! let verdict = analyze(&state);
//! assert!(verdict.is_separable());
//!
//! let bloch = reduced_bloch(&state.to_density_matrix());
//! assert!((bloch.qubit1.x - 1.0).abs() < 1e-10);
//! assert!((bloch.qubit0.x + 1.0).abs() < 1e-10);
//! ```

pub mod bloch;
pub mod complex;
pub mod density_matrix;
pub mod error;
pub mod measurement;
pub mod qubit;
pub mod separability;
pub mod single_qubit;
pub mod state_vector;

pub use bloch::{entanglement_entropy, reduced_bloch, BlochAngles, BlochVector, ReducedBloch};
pub use density_matrix::DensityMatrix;
pub use error::{Result, StateError};
pub use measurement::{collapse, measure, outcome_probabilities, MeasurementOutcome};
pub use qubit::Qubit;
pub use separability::{
    analyze, analyze_with_tolerance, concurrence, schmidt_coefficients, SeparableDecomposition,
    Separability, DEFAULT_SEPARABILITY_TOLERANCE,
};
pub use single_qubit::SingleQubitState;
pub use state_vector::{StateVector, BASIS_LABELS, DIMENSION};

pub use num_complex::Complex64;
