//! Normalized single-qubit states α|0⟩ + β|1⟩

use crate::bloch::BlochVector;
use crate::complex::{self, ONE, ZERO};
use crate::error::Result;
use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// A normalized single-qubit pure state α|0⟩ + β|1⟩
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleQubitState {
    alpha: Complex64,
    beta: Complex64,
}

impl SingleQubitState {
    /// |0⟩
    pub const ZERO: Self = Self {
        alpha: ONE,
        beta: ZERO,
    };

    /// |1⟩
    pub const ONE: Self = Self {
        alpha: ZERO,
        beta: ONE,
    };

    /// Create a state from raw amplitudes, normalizing them
    ///
    /// # Errors
    /// [`StateError::ZeroNorm`](crate::StateError::ZeroNorm) if both amplitudes
    /// vanish, [`StateError::InvalidAmplitude`](crate::StateError::InvalidAmplitude)
    /// if either is not finite.
    pub fn new(alpha: Complex64, beta: Complex64) -> Result<Self> {
        let mut pair = [alpha, beta];
        complex::ensure_finite(&pair)?;
        complex::normalize_in_place(&mut pair)?;
        Ok(Self {
            alpha: pair[0],
            beta: pair[1],
        })
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        let h = Complex64::new(complex::INV_SQRT2, 0.0);
        Self { alpha: h, beta: h }
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        let h = Complex64::new(complex::INV_SQRT2, 0.0);
        Self { alpha: h, beta: -h }
    }

    /// Multiply both amplitudes by a unit-modulus `phase`
    pub(crate) fn rotated(&self, phase: Complex64) -> Self {
        Self {
            alpha: self.alpha * phase,
            beta: self.beta * phase,
        }
    }

    /// Amplitude of |0⟩
    #[inline]
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩
    #[inline]
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// `[α, β]`
    #[inline]
    pub fn amplitudes(&self) -> [Complex64; 2] {
        [self.alpha, self.beta]
    }

    /// Bloch vector of this pure state (always on the unit sphere)
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::from_state(&self.amplitudes())
    }

    /// Relative phase arg(β/α) in (−π, π]
    ///
    /// Zero when either amplitude vanishes, since the phase is then undefined.
    pub fn relative_phase(&self) -> f64 {
        match complex::checked_div(self.beta, self.alpha) {
            Ok(ratio) if self.beta.norm() > complex::ZERO_TOLERANCE => {
                // atan2 yields −π for a negative real ratio with −0.0 imaginary part
                let phase = ratio.arg();
                if phase <= -PI {
                    phase + 2.0 * PI
                } else {
                    phase
                }
            },
            _ => 0.0,
        }
    }

    /// Equality up to a global phase: |⟨self|other⟩|² ≈ 1
    pub fn approx_eq_up_to_phase(&self, other: &Self, tolerance: f64) -> bool {
        let overlap = self.alpha.conj() * other.alpha + self.beta.conj() * other.beta;
        (overlap.norm_sqr() - 1.0).abs() <= tolerance
    }
}

impl Default for SingleQubitState {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for SingleQubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}{:+.4}i)|0⟩ + ({:.4}{:+.4}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}
