//! Bloch vectors and the reduced single-qubit projection
//!
//! Any single-qubit density matrix can be written ρ = (I + xσx + yσy + zσz)/2
//! with (x, y, z) inside the unit ball. Pure states sit on the sphere:
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! For a two-qubit state each qubit's reduced state is obtained by tracing out
//! the other one. [`reduced_bloch`] reads the expectation values straight off
//! the 4×4 density matrix instead of building the partial trace.
//!
//! # Example
//!
//! ```
//! use qbloch_state::{reduced_bloch, Qubit, StateVector};
//!
//! let bell = StateVector::bell_phi_plus();
//! let reduced = reduced_bloch(&bell.to_density_matrix());
//! assert!(reduced.get(Qubit::Q0).magnitude() < 1e-10);
//! ```

use crate::density_matrix::DensityMatrix;
use crate::qubit::Qubit;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// A point in the Bloch ball in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochVector {
    /// ⟨σx⟩
    pub x: f64,
    /// ⟨σy⟩
    pub y: f64,
    /// ⟨σz⟩, where +Z is |0⟩ and −Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert a pure single-qubit state `[α, β]` to a Bloch vector
    pub fn from_state(state: &[Complex64; 2]) -> Self {
        let alpha = state[0];
        let beta = state[1];

        // x = 2Re(α*β), y = 2Im(α*β), z = |α|² − |β|²
        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Convert a 2×2 density matrix to a Bloch vector
    pub fn from_density(rho: &[[Complex64; 2]; 2]) -> Self {
        // ρ10 = (x + iy)/2
        Self {
            x: 2.0 * rho[1][0].re,
            y: 2.0 * rho[1][0].im,
            z: rho[0][0].re - rho[1][1].re,
        }
    }

    /// Coordinates as `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the magnitude of the Bloch vector
    ///
    /// 1 for pure states, below 1 for mixed states.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Von Neumann entropy in bits of the state this vector describes
    ///
    /// The eigenvalues of ρ are (1 ± r)/2 with r the magnitude.
    pub fn entropy(&self) -> f64 {
        let r = self.magnitude().min(1.0);
        [(1.0 + r) / 2.0, (1.0 - r) / 2.0]
            .iter()
            .filter(|&&p| p > 1e-15)
            .map(|&p| -p * p.log2())
            .sum()
    }

    /// Convert Bloch vector to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates to a unit Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }

    /// Convert to quantum state coefficients `[α, β]`
    pub fn to_state(&self) -> [Complex64; 2] {
        let alpha = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let beta = Complex64::from_polar((self.theta / 2.0).sin(), self.phi);
        [alpha, beta]
    }
}

/// Reduced Bloch vectors of both qubits of a two-qubit state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReducedBloch {
    pub qubit0: BlochVector,
    pub qubit1: BlochVector,
}

impl ReducedBloch {
    /// Get the vector for `qubit`
    pub fn get(&self, qubit: Qubit) -> BlochVector {
        match qubit {
            Qubit::Q0 => self.qubit0,
            Qubit::Q1 => self.qubit1,
        }
    }
}

/// Closed-form reduced Bloch vectors from a two-qubit density matrix
///
/// With ρ indexed by |q1 q0⟩:
///
/// - qubit 1 (trace out qubit 0): x + iy = 2(ρ20 + ρ31), z = ρ00 + ρ11 − ρ22 − ρ33
/// - qubit 0 (trace out qubit 1): x + iy = 2(ρ10 + ρ32), z = ρ00 − ρ11 + ρ22 − ρ33
///
/// Valid for separable and entangled states alike; for entangled states the
/// vectors lie strictly inside the ball.
pub fn reduced_bloch(rho: &DensityMatrix) -> ReducedBloch {
    let diag = |i: usize| rho.get(i, i).re;

    let coherence1 = rho.get(2, 0) + rho.get(3, 1);
    let qubit1 = BlochVector {
        x: 2.0 * coherence1.re,
        y: 2.0 * coherence1.im,
        z: diag(0) + diag(1) - diag(2) - diag(3),
    };

    let coherence0 = rho.get(1, 0) + rho.get(3, 2);
    let qubit0 = BlochVector {
        x: 2.0 * coherence0.re,
        y: 2.0 * coherence0.im,
        z: diag(0) - diag(1) + diag(2) - diag(3),
    };

    ReducedBloch { qubit0, qubit1 }
}

/// Entanglement entropy (bits) between the two qubits
///
/// Both reduced states share their spectrum, so either qubit gives the same
/// value: 0 for product states, 1 for Bell states.
pub fn entanglement_entropy(state: &StateVector) -> f64 {
    reduced_bloch(&state.to_density_matrix()).qubit0.entropy()
}
