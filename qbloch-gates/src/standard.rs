//! Standard two-qubit gates offered by the gate picker
//!
//! Single-qubit lifts are written `A⊗B`: the left factor acts on qubit 1, the
//! right factor on qubit 0.

use crate::gate_matrix::GateMatrix;
use crate::matrices::{self, Matrix2, Matrix4};
use crate::matrix_ops::tensor_product;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unrecognized gate name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown gate '{name}'")]
pub struct ParseGateError {
    pub name: String,
}

/// Named gates with fixed matrices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardGate {
    /// CNOT, control qubit 0, target qubit 1
    Cnot01,
    /// CNOT, control qubit 1, target qubit 0
    Cnot10,
    Cz,
    Iswap,
    Swap,
    /// H ⊗ I
    HadamardQ1,
    /// I ⊗ H
    HadamardQ0,
    /// X ⊗ I
    PauliXQ1,
    /// I ⊗ X
    PauliXQ0,
    /// Y ⊗ I
    PauliYQ1,
    /// I ⊗ Y
    PauliYQ0,
    /// Z ⊗ I
    PauliZQ1,
    /// I ⊗ Z
    PauliZQ0,
}

impl StandardGate {
    pub const ALL: [StandardGate; 13] = [
        StandardGate::Cnot01,
        StandardGate::Cnot10,
        StandardGate::Cz,
        StandardGate::Iswap,
        StandardGate::Swap,
        StandardGate::HadamardQ1,
        StandardGate::HadamardQ0,
        StandardGate::PauliXQ1,
        StandardGate::PauliXQ0,
        StandardGate::PauliYQ1,
        StandardGate::PauliYQ0,
        StandardGate::PauliZQ1,
        StandardGate::PauliZQ0,
    ];

    /// Identifier used in gate payloads
    pub const fn name(self) -> &'static str {
        match self {
            StandardGate::Cnot01 => "cnot01",
            StandardGate::Cnot10 => "cnot10",
            StandardGate::Cz => "cz",
            StandardGate::Iswap => "iswap",
            StandardGate::Swap => "swap",
            StandardGate::HadamardQ1 => "h-tensor-i",
            StandardGate::HadamardQ0 => "i-tensor-h",
            StandardGate::PauliXQ1 => "x-tensor-i",
            StandardGate::PauliXQ0 => "i-tensor-x",
            StandardGate::PauliYQ1 => "y-tensor-i",
            StandardGate::PauliYQ0 => "i-tensor-y",
            StandardGate::PauliZQ1 => "z-tensor-i",
            StandardGate::PauliZQ0 => "i-tensor-z",
        }
    }

    /// Whether the gate is its own inverse
    pub const fn is_self_inverse(self) -> bool {
        !matches!(self, StandardGate::Iswap)
    }

    /// The 4×4 matrix of the gate
    pub fn matrix(self) -> Matrix4 {
        match self {
            StandardGate::Cnot01 => matrices::CNOT_01,
            StandardGate::Cnot10 => matrices::CNOT_10,
            StandardGate::Cz => matrices::CZ,
            StandardGate::Iswap => matrices::ISWAP,
            StandardGate::Swap => matrices::SWAP,
            StandardGate::HadamardQ1 => lift_q1(&matrices::HADAMARD),
            StandardGate::HadamardQ0 => lift_q0(&matrices::HADAMARD),
            StandardGate::PauliXQ1 => lift_q1(&matrices::PAULI_X),
            StandardGate::PauliXQ0 => lift_q0(&matrices::PAULI_X),
            StandardGate::PauliYQ1 => lift_q1(&matrices::PAULI_Y),
            StandardGate::PauliYQ0 => lift_q0(&matrices::PAULI_Y),
            StandardGate::PauliZQ1 => lift_q1(&matrices::PAULI_Z),
            StandardGate::PauliZQ0 => lift_q0(&matrices::PAULI_Z),
        }
    }

    /// The gate as a validated [`GateMatrix`]
    pub fn gate(self) -> GateMatrix {
        GateMatrix::from(self)
    }
}

fn lift_q1(single: &Matrix2) -> Matrix4 {
    tensor_product(single, &matrices::IDENTITY)
}

fn lift_q0(single: &Matrix2) -> Matrix4 {
    tensor_product(&matrices::IDENTITY, single)
}

impl From<StandardGate> for GateMatrix {
    fn from(gate: StandardGate) -> Self {
        GateMatrix::from_exact_unitary(gate.matrix())
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardGate {
    type Err = ParseGateError;

    /// Case-insensitive; also accepts `_` in place of `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        StandardGate::ALL
            .into_iter()
            .find(|gate| gate.name() == wanted)
            .ok_or_else(|| ParseGateError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_ops::{is_hermitian, is_unitary};

    #[test]
    fn test_names_round_trip() {
        for gate in StandardGate::ALL {
            assert_eq!(gate.name().parse::<StandardGate>().unwrap(), gate);
        }
        assert_eq!("CNOT10".parse::<StandardGate>().unwrap(), StandardGate::Cnot10);
        assert_eq!(
            "h_tensor_i".parse::<StandardGate>().unwrap(),
            StandardGate::HadamardQ1
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = "toffoli".parse::<StandardGate>().unwrap_err();
        assert_eq!(err.name, "toffoli");
        assert_eq!(err.to_string(), "Unknown gate 'toffoli'");
    }

    #[test]
    fn test_all_unitary() {
        for gate in StandardGate::ALL {
            assert!(is_unitary(&gate.matrix(), 1e-12), "{gate} not unitary");
        }
    }

    #[test]
    fn test_gate_carries_exact_matrix() {
        for gate in StandardGate::ALL {
            let checked = GateMatrix::with_tolerance(gate.matrix(), 1e-12).unwrap();
            assert_eq!(gate.gate(), checked, "{gate}");
            assert_eq!(gate.gate().rows(), &gate.matrix());
            assert_ne!(gate.gate(), GateMatrix::identity(), "{gate}");
        }
    }

    #[test]
    fn test_self_inverse_matches_hermitian() {
        for gate in StandardGate::ALL {
            assert_eq!(gate.is_self_inverse(), is_hermitian(&gate.matrix(), 1e-12));
        }
    }
}
