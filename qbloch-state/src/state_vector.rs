//! Two-qubit state vector in the basis |00⟩, |01⟩, |10⟩, |11⟩

use crate::complex::{self, INV_SQRT2, ONE, ZERO};
use crate::density_matrix::DensityMatrix;
use crate::error::{Result, StateError};
use crate::qubit::Qubit;
use crate::single_qubit::SingleQubitState;
use num_complex::Complex64;
use std::fmt;
use std::ops::Index;

/// Number of amplitudes in a two-qubit state
pub const DIMENSION: usize = 4;

/// Basis labels in index order
pub const BASIS_LABELS: [&str; DIMENSION] = ["|00⟩", "|01⟩", "|10⟩", "|11⟩"];

/// Normalized two-qubit state vector
///
/// Index `i` holds the amplitude of |q1 q0⟩ where `q1 = i >> 1` and
/// `q0 = i & 1`. Every constructor normalizes, so a `StateVector` always has
/// unit norm up to floating point error.
///
/// # Example
///
/// ```
/// use qbloch_state::StateVector;
/// use num_complex::Complex64;
///
/// let state = StateVector::normalize([
///     Complex64::new(1.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(1.0, 0.0),
/// ]).unwrap();
/// assert!((state.probabilities()[0] - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateVector {
    amplitudes: [Complex64; DIMENSION],
}

impl StateVector {
    /// Normalize raw amplitudes into a state vector
    ///
    /// # Errors
    /// [`StateError::InvalidAmplitude`] for NaN/infinite components,
    /// [`StateError::ZeroNorm`] if the vector is (numerically) zero.
    pub fn normalize(mut amplitudes: [Complex64; DIMENSION]) -> Result<Self> {
        complex::ensure_finite(&amplitudes)?;
        complex::normalize_in_place(&mut amplitudes)?;
        Ok(Self { amplitudes })
    }

    /// Normalize a slice of raw amplitudes (must have length 4)
    pub fn from_slice(amplitudes: &[Complex64]) -> Result<Self> {
        let raw: [Complex64; DIMENSION] =
            amplitudes.try_into().map_err(|_| StateError::DimensionMismatch {
                expected: DIMENSION,
                actual: amplitudes.len(),
            })?;
        Self::normalize(raw)
    }

    /// Tensor two single-qubit states: (α|0⟩ + β|1⟩) ⊗ (γ|0⟩ + δ|1⟩)
    ///
    /// `(alpha, beta)` belongs to qubit 1 (left factor), `(gamma, delta)` to
    /// qubit 0 (right factor). Each pair is normalized first, so the resulting
    /// amplitudes are `[αγ, αδ, βγ, βδ]`.
    pub fn from_alpha_beta(
        alpha: Complex64,
        beta: Complex64,
        gamma: Complex64,
        delta: Complex64,
    ) -> Result<Self> {
        let qubit1 = SingleQubitState::new(alpha, beta)?;
        let qubit0 = SingleQubitState::new(gamma, delta)?;
        Self::from_product(&qubit1, &qubit0)
    }

    /// Tensor product `qubit1 ⊗ qubit0`
    pub fn from_product(qubit1: &SingleQubitState, qubit0: &SingleQubitState) -> Result<Self> {
        let (a, b) = (qubit1.alpha(), qubit1.beta());
        let (g, d) = (qubit0.alpha(), qubit0.beta());
        Self::normalize([a * g, a * d, b * g, b * d])
    }

    /// Computational basis state |index⟩
    pub fn basis(index: usize) -> Result<Self> {
        if index >= DIMENSION {
            return Err(StateError::DimensionMismatch {
                expected: DIMENSION,
                actual: index.saturating_add(1),
            });
        }
        let mut amplitudes = [ZERO; DIMENSION];
        amplitudes[index] = ONE;
        Ok(Self { amplitudes })
    }

    /// |Φ+⟩ = (|00⟩ + |11⟩)/√2
    pub fn bell_phi_plus() -> Self {
        Self::bell(0, 3, 1.0)
    }

    /// |Φ−⟩ = (|00⟩ − |11⟩)/√2
    pub fn bell_phi_minus() -> Self {
        Self::bell(0, 3, -1.0)
    }

    /// |Ψ+⟩ = (|01⟩ + |10⟩)/√2
    pub fn bell_psi_plus() -> Self {
        Self::bell(1, 2, 1.0)
    }

    /// |Ψ−⟩ = (|01⟩ − |10⟩)/√2
    pub fn bell_psi_minus() -> Self {
        Self::bell(1, 2, -1.0)
    }

    fn bell(first: usize, second: usize, sign: f64) -> Self {
        let mut amplitudes = [ZERO; DIMENSION];
        amplitudes[first] = Complex64::new(INV_SQRT2, 0.0);
        amplitudes[second] = Complex64::new(sign * INV_SQRT2, 0.0);
        Self { amplitudes }
    }

    /// Get the amplitudes in basis order
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64; DIMENSION] {
        &self.amplitudes
    }

    /// Amplitudes reshaped to a 2×2 matrix `m[q1][q0]`
    #[inline]
    pub fn as_matrix(&self) -> [[Complex64; 2]; 2] {
        let a = &self.amplitudes;
        [[a[0], a[1]], [a[2], a[3]]]
    }

    /// L2 norm (1 up to rounding)
    pub fn norm(&self) -> f64 {
        complex::norm(&self.amplitudes)
    }

    /// Probability of each basis outcome, |aᵢ|²
    pub fn probabilities(&self) -> [f64; DIMENSION] {
        self.amplitudes.map(|a| a.norm_sqr())
    }

    /// Probability that `qubit` reads `bit` when measured
    pub fn qubit_probability(&self, qubit: Qubit, bit: u8) -> f64 {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(idx, _)| qubit.bit_of(*idx) == bit)
            .map(|(_, amp)| amp.norm_sqr())
            .sum()
    }

    /// Inner product ⟨self|other⟩
    pub fn inner_product(&self, other: &StateVector) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Fidelity |⟨self|other⟩|²
    pub fn fidelity(&self, other: &StateVector) -> f64 {
        self.inner_product(other).norm_sqr()
    }

    /// Equality up to a global phase
    pub fn approx_eq_up_to_phase(&self, other: &StateVector, tolerance: f64) -> bool {
        (self.fidelity(other) - 1.0).abs() <= tolerance
    }

    /// Pure-state density matrix |ψ⟩⟨ψ|
    pub fn to_density_matrix(&self) -> DensityMatrix {
        DensityMatrix::from_state(self)
    }
}

impl Default for StateVector {
    /// |00⟩
    fn default() -> Self {
        let mut amplitudes = [ZERO; DIMENSION];
        amplitudes[0] = ONE;
        Self { amplitudes }
    }
}

impl Index<usize> for StateVector {
    type Output = Complex64;

    #[inline]
    fn index(&self, index: usize) -> &Complex64 {
        &self.amplitudes[index]
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (amp, label) in self.amplitudes.iter().zip(BASIS_LABELS) {
            if amp.norm() <= complex::ZERO_TOLERANCE {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "({:.4}{:+.4}i){}", amp.re, amp.im, label)?;
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
