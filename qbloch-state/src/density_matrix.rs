//! Density matrix of a two-qubit pure state
//!
//! A density matrix ρ is a positive semi-definite, Hermitian matrix with Tr(ρ) = 1.
//! Here ρ = |ψ⟩⟨ψ| is always derived from a [`StateVector`] and never stored
//! independently of it.

use crate::complex::ZERO;
use crate::qubit::Qubit;
use crate::state_vector::{StateVector, DIMENSION};
use num_complex::Complex64;
use std::fmt;

/// 4×4 density matrix in row-major order
#[derive(Clone, Copy, PartialEq)]
pub struct DensityMatrix {
    matrix: [[Complex64; DIMENSION]; DIMENSION],
}

impl DensityMatrix {
    /// Compute ρ = |ψ⟩⟨ψ|, i.e. ρᵢⱼ = ψᵢ ψⱼ*
    pub fn from_state(state: &StateVector) -> Self {
        let a = state.amplitudes();
        let mut matrix = [[ZERO; DIMENSION]; DIMENSION];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = a[i] * a[j].conj();
            }
        }
        Self { matrix }
    }

    /// Get a matrix element ρᵢⱼ
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row][col]
    }

    /// Get all rows
    #[inline]
    pub fn rows(&self) -> &[[Complex64; DIMENSION]; DIMENSION] {
        &self.matrix
    }

    /// Tr(ρ)
    pub fn trace(&self) -> f64 {
        (0..DIMENSION).map(|i| self.matrix[i][i].re).sum()
    }

    /// Tr(ρ²), equal to 1 for the pure states this type is built from
    pub fn purity(&self) -> f64 {
        // Tr(ρ²) = Σᵢⱼ |ρᵢⱼ|² for Hermitian ρ
        self.matrix
            .iter()
            .flat_map(|row| row.iter())
            .map(|e| e.norm_sqr())
            .sum()
    }

    /// Check ρᵢⱼ = conj(ρⱼᵢ) within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        for i in 0..DIMENSION {
            for j in i..DIMENSION {
                if (self.matrix[i][j] - self.matrix[j][i].conj()).norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Reduced 2×2 density matrix of `keep`, tracing out the other qubit
    ///
    /// Explicit partial trace over basis indices; [`crate::bloch::reduced_bloch`]
    /// uses the equivalent closed forms.
    pub fn reduced(&self, keep: Qubit) -> [[Complex64; 2]; 2] {
        let traced = keep.other();
        let mut reduced = [[ZERO; 2]; 2];
        for i in 0..DIMENSION {
            for j in 0..DIMENSION {
                if traced.bit_of(i) != traced.bit_of(j) {
                    continue;
                }
                let r = keep.bit_of(i) as usize;
                let c = keep.bit_of(j) as usize;
                reduced[r][c] += self.matrix[i][j];
            }
        }
        reduced
    }
}

impl fmt::Debug for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityMatrix {{ trace: {:.4}, purity: {:.4} }}",
            self.trace(),
            self.purity()
        )
    }
}
