//! Boundary payloads exchanged with the expression parser and display layer
//!
//! Complex numbers travel as `{re, im}` objects. All 4-vectors use the basis
//! order |00⟩, |01⟩, |10⟩, |11⟩.

use crate::error::Result;
use crate::snapshot::StateSnapshot;
use num_complex::Complex64;
use qbloch_gates::{GateMatrix, StandardGate};
use qbloch_state::{Qubit, StateError, StateVector};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A complex number on the wire
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexPayload {
    pub re: f64,
    #[serde(default)]
    pub im: f64,
}

impl ComplexPayload {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    const fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl From<Complex64> for ComplexPayload {
    fn from(value: Complex64) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<ComplexPayload> for Complex64 {
    fn from(value: ComplexPayload) -> Self {
        Complex64::new(value.re, value.im)
    }
}

/// `{vector: [4 × {re, im}]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VectorInput {
    pub vector: Vec<ComplexPayload>,
}

/// `{alpha, beta, gamma, delta}`; absent fields describe |0⟩ ⊗ |0⟩
///
/// At least one of the four fields must be present, so an empty object is
/// rejected instead of silently meaning |00⟩.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AlphaBetaFields")]
pub struct AlphaBetaInput {
    pub alpha: ComplexPayload,
    pub beta: ComplexPayload,
    pub gamma: ComplexPayload,
    pub delta: ComplexPayload,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AlphaBetaFields {
    alpha: Option<ComplexPayload>,
    beta: Option<ComplexPayload>,
    gamma: Option<ComplexPayload>,
    delta: Option<ComplexPayload>,
}

impl TryFrom<AlphaBetaFields> for AlphaBetaInput {
    type Error = &'static str;

    fn try_from(fields: AlphaBetaFields) -> std::result::Result<Self, Self::Error> {
        let AlphaBetaFields {
            alpha,
            beta,
            gamma,
            delta,
        } = fields;
        if alpha.is_none() && beta.is_none() && gamma.is_none() && delta.is_none() {
            return Err("expected at least one of alpha, beta, gamma, delta");
        }
        Ok(Self {
            alpha: alpha.unwrap_or(ComplexPayload::one()),
            beta: beta.unwrap_or_default(),
            gamma: gamma.unwrap_or(ComplexPayload::one()),
            delta: delta.unwrap_or_default(),
        })
    }
}

/// Input state, either a raw amplitude vector or a separable α/β/γ/δ form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateInput {
    Vector(VectorInput),
    AlphaBeta(AlphaBetaInput),
}

impl StateInput {
    pub fn vector(amplitudes: [Complex64; 4]) -> Self {
        StateInput::Vector(VectorInput {
            vector: amplitudes.iter().copied().map(ComplexPayload::from).collect(),
        })
    }

    pub fn alpha_beta(alpha: Complex64, beta: Complex64, gamma: Complex64, delta: Complex64) -> Self {
        StateInput::AlphaBeta(AlphaBetaInput {
            alpha: alpha.into(),
            beta: beta.into(),
            gamma: gamma.into(),
            delta: delta.into(),
        })
    }

    /// Normalize the input into a state vector
    ///
    /// # Errors
    /// [`StateError::DimensionMismatch`] for a vector of the wrong length,
    /// [`StateError::ZeroNorm`] for a zero vector or zero single-qubit pair,
    /// [`StateError::InvalidAmplitude`] for non-finite components.
    pub fn to_state(&self) -> std::result::Result<StateVector, StateError> {
        match self {
            StateInput::Vector(input) => {
                let amplitudes: Vec<Complex64> =
                    input.vector.iter().copied().map(Complex64::from).collect();
                StateVector::from_slice(&amplitudes)
            },
            StateInput::AlphaBeta(input) => StateVector::from_alpha_beta(
                input.alpha.into(),
                input.beta.into(),
                input.gamma.into(),
                input.delta.into(),
            ),
        }
    }
}

/// `{matrix: 4×4 array of {re, im}}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixInput {
    pub matrix: Vec<Vec<ComplexPayload>>,
}

/// `{gate: "<name>"}`, e.g. `"cnot10"` or `"h-tensor-i"`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedGateInput {
    pub gate: String,
}

/// Gate input, either an explicit matrix or a standard gate name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GateInput {
    Matrix(MatrixInput),
    Named(NamedGateInput),
}

impl GateInput {
    pub fn matrix(rows: [[Complex64; 4]; 4]) -> Self {
        GateInput::Matrix(MatrixInput {
            matrix: rows
                .iter()
                .map(|row| row.iter().copied().map(ComplexPayload::from).collect())
                .collect(),
        })
    }

    pub fn named(gate: StandardGate) -> Self {
        GateInput::Named(NamedGateInput {
            gate: gate.name().to_string(),
        })
    }

    /// Resolve to a validated gate
    pub fn to_gate(&self, unitary_tolerance: f64) -> Result<GateMatrix> {
        match self {
            GateInput::Matrix(input) => {
                let rows: Vec<Vec<Complex64>> = input
                    .matrix
                    .iter()
                    .map(|row| row.iter().copied().map(Complex64::from).collect())
                    .collect();
                Ok(GateMatrix::from_rows(&rows, unitary_tolerance)?)
            },
            GateInput::Named(input) => Ok(input.gate.parse::<StandardGate>()?.gate()),
        }
    }
}

/// `{qubit_index: 0|1}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureRequest {
    pub qubit_index: usize,
}

impl MeasureRequest {
    pub fn new(qubit: Qubit) -> Self {
        Self {
            qubit_index: qubit.index(),
        }
    }

    pub fn qubit(&self) -> std::result::Result<Qubit, StateError> {
        Qubit::try_from(self.qubit_index)
    }
}

/// Observed outcome with the pre-collapse probabilities and the collapsed state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureResponse {
    pub qubit_index: usize,
    pub outcome: u8,
    pub prob_0: f64,
    pub prob_1: f64,
    pub snapshot: StateSnapshot,
}

impl MeasureResponse {
    /// Probability of the observed outcome
    pub fn probability(&self) -> f64 {
        if self.outcome == 0 {
            self.prob_0
        } else {
            self.prob_1
        }
    }
}

/// Decode a payload from JSON text
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a payload as JSON text
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
