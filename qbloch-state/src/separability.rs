//! Separability analysis of two-qubit states
//!
//! Reshaping the amplitudes into the 2×2 matrix `M[q1][q0]`, a state is a
//! product (α|0⟩ + β|1⟩) ⊗ (γ|0⟩ + δ|1⟩) exactly when `M` has rank 1. The
//! analyzer takes the row of `M` with the largest norm as the qubit 0 factor,
//! projects both rows onto it to obtain the qubit 1 factor, and accepts the
//! factorization if re-tensoring reproduces every amplitude within tolerance.
//! The largest row always has norm ≥ 1/√2, so no pivot degenerates.

use crate::complex;
use crate::error::Result;
use crate::single_qubit::SingleQubitState;
use crate::state_vector::{StateVector, DIMENSION};
use num_complex::Complex64;

/// Default maximum amplitude reconstruction error for a separable verdict
pub const DEFAULT_SEPARABILITY_TOLERANCE: f64 = 1e-6;

/// Factorization ψ = e^(iφ) · (α|0⟩ + β|1⟩) ⊗ (γ|0⟩ + δ|1⟩)
///
/// Both factors are normalized and phase-canonical: their leading non-zero
/// amplitude is real and positive. Any leftover phase is kept in
/// `global_phase` so that the decomposition reproduces the amplitudes exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparableDecomposition {
    /// Left tensor factor (α, β)
    pub qubit1: SingleQubitState,
    /// Right tensor factor (γ, δ)
    pub qubit0: SingleQubitState,
    /// Unit-modulus global phase e^(iφ)
    pub global_phase: Complex64,
}

impl SeparableDecomposition {
    pub fn alpha(&self) -> Complex64 {
        self.qubit1.alpha()
    }

    pub fn beta(&self) -> Complex64 {
        self.qubit1.beta()
    }

    pub fn gamma(&self) -> Complex64 {
        self.qubit0.alpha()
    }

    pub fn delta(&self) -> Complex64 {
        self.qubit0.beta()
    }

    /// Amplitudes e^(iφ) · [αγ, αδ, βγ, βδ]
    pub fn reconstruct(&self) -> [Complex64; DIMENSION] {
        let (a, b) = (self.alpha(), self.beta());
        let (g, d) = (self.gamma(), self.delta());
        [a * g, a * d, b * g, b * d].map(|amp| amp * self.global_phase)
    }

    /// Rebuild the state vector
    pub fn to_state(&self) -> Result<StateVector> {
        StateVector::normalize(self.reconstruct())
    }
}

/// Verdict of the separability analysis
///
/// Entanglement is a classification, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Separability {
    /// The state factors into single-qubit states
    Separable(SeparableDecomposition),
    /// The state does not factor
    Entangled {
        /// 2|a00·a11 − a01·a10|, in (0, 1]
        concurrence: f64,
    },
}

impl Separability {
    pub fn is_separable(&self) -> bool {
        matches!(self, Separability::Separable(_))
    }

    /// The decomposition, if the state is separable
    pub fn decomposition(&self) -> Option<&SeparableDecomposition> {
        match self {
            Separability::Separable(decomposition) => Some(decomposition),
            Separability::Entangled { .. } => None,
        }
    }
}

/// Classify `state` with [`DEFAULT_SEPARABILITY_TOLERANCE`]
pub fn analyze(state: &StateVector) -> Separability {
    analyze_with_tolerance(state, DEFAULT_SEPARABILITY_TOLERANCE)
}

/// Classify `state`, accepting a factorization whose largest amplitude
/// reconstruction error is at most `tolerance`
pub fn analyze_with_tolerance(state: &StateVector, tolerance: f64) -> Separability {
    let entangled = || Separability::Entangled {
        concurrence: concurrence(state),
    };

    let m = state.as_matrix();
    let pivot = if complex::norm(&m[0]) >= complex::norm(&m[1]) {
        0
    } else {
        1
    };

    // Qubit 0 factor: direction of the dominant row
    let Ok(direction) = SingleQubitState::new(m[pivot][0], m[pivot][1]) else {
        return entangled();
    };
    let v = direction.amplitudes();

    // Qubit 1 factor: projection of each row onto that direction
    let project = |row: &[Complex64; 2]| row[0] * v[0].conj() + row[1] * v[1].conj();
    let (alpha, beta) = (project(&m[0]), project(&m[1]));

    let candidate = [alpha * v[0], alpha * v[1], beta * v[0], beta * v[1]];
    let error = candidate
        .iter()
        .zip(state.amplitudes().iter())
        .map(|(c, a)| (c - a).norm())
        .fold(0.0, f64::max);

    if error > tolerance {
        return entangled();
    }

    let Ok(raw_qubit1) = SingleQubitState::new(alpha, beta) else {
        return entangled();
    };
    let (qubit1, phase1) = canonicalize(&raw_qubit1);
    let (qubit0, phase0) = canonicalize(&direction);

    Separability::Separable(SeparableDecomposition {
        qubit1,
        qubit0,
        global_phase: phase1 * phase0,
    })
}

/// Concurrence 2|a00·a11 − a01·a10|: 0 for product states, 1 for Bell states
pub fn concurrence(state: &StateVector) -> f64 {
    let a = state.amplitudes();
    (2.0 * (a[0] * a[3] - a[1] * a[2]).norm()).min(1.0)
}

/// Schmidt coefficients (σ₁ ≥ σ₂ ≥ 0) of the state
///
/// These are the singular values of `M`; σ₁² + σ₂² = 1 and σ₁σ₂ = |det M|,
/// so σ₂ = 0 exactly when the state is a product.
pub fn schmidt_coefficients(state: &StateVector) -> [f64; 2] {
    let det = concurrence(state) / 2.0;
    let discriminant = (1.0 - 4.0 * det * det).max(0.0).sqrt();
    let large = ((1.0 + discriminant) / 2.0).sqrt();
    let small = ((1.0 - discriminant) / 2.0).max(0.0).sqrt();
    [large, small]
}

/// Rotate the leading non-zero amplitude onto the positive real axis,
/// returning the canonical state and the phase that was removed
///
/// `state` is normalized, so the leading amplitude has modulus near 1 unless
/// α is below [`complex::ZERO_TOLERANCE`], in which case |β| ≈ 1.
fn canonicalize(state: &SingleQubitState) -> (SingleQubitState, Complex64) {
    let leading = if state.alpha().norm() > complex::ZERO_TOLERANCE {
        state.alpha()
    } else {
        state.beta()
    };
    let phase = leading / leading.norm();
    (state.rotated(phase.conj()), phase)
}
