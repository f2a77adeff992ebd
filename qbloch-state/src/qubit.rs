//! Qubit addressing for the two-qubit register
//!
//! Basis index `i` of a state vector encodes qubit 1 in bit 1 and qubit 0 in
//! bit 0, so the basis order is |q1 q0⟩ = |00⟩, |01⟩, |10⟩, |11⟩. Qubit 1 is the
//! left tensor factor and qubit 0 the right one.

use crate::error::StateError;
use std::fmt;

/// One of the two qubits of the register
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Qubit {
    /// Rightmost tensor factor (least significant basis bit)
    Q0,
    /// Leftmost tensor factor (most significant basis bit)
    Q1,
}

impl Qubit {
    /// Both qubits, in index order
    pub const ALL: [Qubit; 2] = [Qubit::Q0, Qubit::Q1];

    /// Get the underlying index
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Qubit::Q0 => 0,
            Qubit::Q1 => 1,
        }
    }

    /// Bit mask selecting this qubit within a basis index
    #[inline]
    pub const fn mask(self) -> usize {
        1 << self.index()
    }

    /// Value of this qubit's bit in `basis_index`
    #[inline]
    pub const fn bit_of(self, basis_index: usize) -> u8 {
        ((basis_index >> self.index()) & 1) as u8
    }

    /// The other qubit
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Qubit::Q0 => Qubit::Q1,
            Qubit::Q1 => Qubit::Q0,
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.index())
    }
}

impl TryFrom<usize> for Qubit {
    type Error = StateError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Qubit::Q0),
            1 => Ok(Qubit::Q1),
            _ => Err(StateError::InvalidQubitIndex { index }),
        }
    }
}

impl From<Qubit> for usize {
    #[inline]
    fn from(qubit: Qubit) -> Self {
        qubit.index()
    }
}
