//! Typed snapshot of a state for the rendering layer
//!
//! The snapshot is derived data: it is recomputed from a [`StateVector`]
//! after every transition and never fed back into the engine.

use crate::payload::ComplexPayload;
use qbloch_state::{analyze_with_tolerance, reduced_bloch, Separability, StateVector};
use serde::{Deserialize, Serialize};

/// Qubit 1 factor `{alpha, beta}`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qubit1Amplitudes {
    pub alpha: ComplexPayload,
    pub beta: ComplexPayload,
}

/// Qubit 0 factor `{gamma, delta}`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qubit0Amplitudes {
    pub gamma: ComplexPayload,
    pub delta: ComplexPayload,
}

/// Everything the display needs about one state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub coefficients: [ComplexPayload; 4],
    pub probabilities: [f64; 4],
    pub is_separable: bool,
    /// Reduced Bloch vector `[x, y, z]` of qubit 0, never null
    ///
    /// Always filled in. On the unit sphere only when `is_separable`; for an
    /// entangled state it lies strictly inside the ball (the origin for a Bell
    /// state), so consumers drawing a pure-state arrow must check
    /// `is_separable` first.
    pub bloch_qubit0: [f64; 3],
    /// Reduced Bloch vector of qubit 1, with the same contract as `bloch_qubit0`
    pub bloch_qubit1: [f64; 3],
    /// Present iff the state is separable
    pub qubit0_state: Option<Qubit0Amplitudes>,
    pub qubit1_state: Option<Qubit1Amplitudes>,
    /// arg(δ/γ), 0 when undefined or entangled
    pub q0_relative_phase: f64,
    /// arg(β/α), 0 when undefined or entangled
    pub q1_relative_phase: f64,
    pub concurrence: f64,
}

impl StateSnapshot {
    /// Derive the snapshot of `state`
    pub fn from_state(state: &StateVector, separability_tolerance: f64) -> Self {
        let bloch = reduced_bloch(&state.to_density_matrix());
        let verdict = analyze_with_tolerance(state, separability_tolerance);

        let mut snapshot = Self {
            coefficients: (*state.amplitudes()).map(ComplexPayload::from),
            probabilities: state.probabilities(),
            is_separable: verdict.is_separable(),
            bloch_qubit0: bloch.qubit0.to_array(),
            bloch_qubit1: bloch.qubit1.to_array(),
            qubit0_state: None,
            qubit1_state: None,
            q0_relative_phase: 0.0,
            q1_relative_phase: 0.0,
            concurrence: qbloch_state::concurrence(state),
        };

        if let Separability::Separable(decomposition) = verdict {
            snapshot.qubit1_state = Some(Qubit1Amplitudes {
                alpha: decomposition.alpha().into(),
                beta: decomposition.beta().into(),
            });
            snapshot.qubit0_state = Some(Qubit0Amplitudes {
                gamma: decomposition.gamma().into(),
                delta: decomposition.delta().into(),
            });
            snapshot.q1_relative_phase = decomposition.qubit1.relative_phase();
            snapshot.q0_relative_phase = decomposition.qubit0.relative_phase();
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use qbloch_state::DEFAULT_SEPARABILITY_TOLERANCE;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_product_snapshot() {
        let one = Complex64::new(1.0, 0.0);
        // |+⟩ ⊗ (|0⟩ + i|1⟩)/√2
        let state =
            StateVector::from_alpha_beta(one, one, one, Complex64::new(0.0, 1.0)).unwrap();
        let snapshot = StateSnapshot::from_state(&state, DEFAULT_SEPARABILITY_TOLERANCE);

        assert!(snapshot.is_separable);
        assert_abs_diff_eq!(snapshot.bloch_qubit1[0], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(snapshot.bloch_qubit0[1], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(snapshot.q0_relative_phase, FRAC_PI_2, epsilon = 1e-10);
        assert_abs_diff_eq!(snapshot.q1_relative_phase, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(snapshot.concurrence, 0.0, epsilon = 1e-10);

        let q1 = snapshot.qubit1_state.unwrap();
        assert_abs_diff_eq!(q1.alpha.re, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-10);
        assert_abs_diff_eq!(q1.alpha.im, 0.0, epsilon = 1e-10);
        assert!(snapshot.qubit0_state.is_some());
    }

    #[test]
    fn test_bloch_vectors_serialized_for_entangled_state() {
        let snapshot =
            StateSnapshot::from_state(&StateVector::bell_phi_plus(), DEFAULT_SEPARABILITY_TOLERANCE);
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["is_separable"], false);
        assert!(json["qubit0_state"].is_null());
        for key in ["bloch_qubit0", "bloch_qubit1"] {
            let vector = json[key].as_array().unwrap();
            assert_eq!(vector.len(), 3);
            let length: f64 = vector.iter().map(|c| c.as_f64().unwrap().powi(2)).sum();
            assert!(length < 1.0 - 1e-6, "{key} on the sphere");
        }
    }

    #[test]
    fn test_entangled_snapshot() {
        let snapshot =
            StateSnapshot::from_state(&StateVector::bell_psi_minus(), DEFAULT_SEPARABILITY_TOLERANCE);
        assert!(!snapshot.is_separable);
        assert!(snapshot.qubit0_state.is_none());
        assert!(snapshot.qubit1_state.is_none());
        assert_eq!(snapshot.q0_relative_phase, 0.0);
        assert_abs_diff_eq!(snapshot.concurrence, 1.0, epsilon = 1e-10);
        for component in snapshot.bloch_qubit0.iter().chain(&snapshot.bloch_qubit1) {
            assert_abs_diff_eq!(*component, 0.0, epsilon = 1e-10);
        }
        assert_abs_diff_eq!(snapshot.probabilities[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot =
            StateSnapshot::from_state(&StateVector::default(), DEFAULT_SEPARABILITY_TOLERANCE);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["coefficients"][0]["re"], 1.0);
        assert_eq!(value["is_separable"], true);
        assert_eq!(value["bloch_qubit0"].as_array().unwrap().len(), 3);
        assert_eq!(value["qubit1_state"]["alpha"]["re"], 1.0);
        assert!(value["qubit0_state"]["delta"].is_object());

        let entangled =
            StateSnapshot::from_state(&StateVector::bell_phi_plus(), DEFAULT_SEPARABILITY_TOLERANCE);
        let value = serde_json::to_value(&entangled).unwrap();
        assert!(value["qubit0_state"].is_null());
    }
}
