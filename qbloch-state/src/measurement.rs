//! Projective measurement of a single qubit with state collapse
//!
//! Randomness is injected as a sampler returning values in [0, 1), so callers
//! can plug in a seeded generator or a fixed sequence.

use crate::complex::ZERO;
use crate::error::Result;
use crate::qubit::Qubit;
use crate::state_vector::StateVector;

/// Result of measuring one qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasurementOutcome {
    /// Observed classical bit
    pub bit: u8,
    /// P(bit = 0) before collapse
    pub probability_zero: f64,
    /// P(bit = 1) before collapse
    pub probability_one: f64,
    /// Post-measurement state, renormalized
    pub state: StateVector,
}

impl MeasurementOutcome {
    /// Probability of the observed bit
    pub fn probability(&self) -> f64 {
        if self.bit == 0 {
            self.probability_zero
        } else {
            self.probability_one
        }
    }
}

/// `[P(0), P(1)]` for measuring `qubit`, without collapsing
///
/// P(1) is taken as 1 − P(0) so the pair always sums to one.
pub fn outcome_probabilities(state: &StateVector, qubit: Qubit) -> [f64; 2] {
    let zero = state.qubit_probability(qubit, 0).clamp(0.0, 1.0);
    [zero, 1.0 - zero]
}

/// Measure `qubit`, sampling the outcome with `rng`
///
/// The outcome is 0 when the sample is below P(0), else 1. Amplitudes
/// inconsistent with the outcome are zeroed and the rest renormalized.
///
/// # Errors
/// [`StateError::ZeroNorm`](crate::StateError::ZeroNorm) if the sampled
/// outcome has zero probability, which a sampler honouring [0, 1) never
/// produces.
///
/// # Example
/// ```
/// use qbloch_state::{measure, Qubit, StateVector};
///
/// let state = StateVector::default();
/// let outcome = measure(&state, Qubit::Q0, &mut || 0.99).unwrap();
/// assert_eq!(outcome.bit, 0);
/// assert_eq!(outcome.state, state);
/// ```
pub fn measure(
    state: &StateVector,
    qubit: Qubit,
    rng: &mut dyn FnMut() -> f64,
) -> Result<MeasurementOutcome> {
    let [probability_zero, probability_one] = outcome_probabilities(state, qubit);

    let sample = rng();
    let bit = if sample < probability_zero { 0 } else { 1 };

    Ok(MeasurementOutcome {
        bit,
        probability_zero,
        probability_one,
        state: collapse(state, qubit, bit)?,
    })
}

/// Project `qubit` onto `bit` and renormalize
pub fn collapse(state: &StateVector, qubit: Qubit, bit: u8) -> Result<StateVector> {
    let mut amplitudes = *state.amplitudes();
    for (idx, amp) in amplitudes.iter_mut().enumerate() {
        if qubit.bit_of(idx) != bit {
            *amp = ZERO;
        }
    }
    StateVector::normalize(amplitudes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{approx_eq, ONE};
    use crate::StateError;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    // Simple linear congruential generator for testing
    struct TestRng {
        state: u64,
    }

    impl TestRng {
        fn new(seed: u64) -> Self {
            Self { state: seed }
        }

        fn next(&mut self) -> f64 {
            self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
            ((self.state / 65536) % 32768) as f64 / 32768.0
        }
    }

    #[test]
    fn test_deterministic_zero_state() {
        let state = StateVector::default();
        let mut rng = TestRng::new(42);
        for _ in 0..50 {
            let outcome = measure(&state, Qubit::Q0, &mut || rng.next()).unwrap();
            assert_eq!(outcome.bit, 0);
            assert_eq!(outcome.state, state);
            assert_relative_eq!(outcome.probability(), 1.0);
        }
    }

    #[test]
    fn test_sample_threshold() {
        // P(q1 = 0) = 0.36
        let state = StateVector::normalize([
            Complex64::new(0.6, 0.0),
            ZERO,
            Complex64::new(0.0, 0.8),
            ZERO,
        ])
        .unwrap();

        let low = measure(&state, Qubit::Q1, &mut || 0.35).unwrap();
        assert_eq!(low.bit, 0);
        assert!(approx_eq(low.state[0], ONE, 1e-12));

        let high = measure(&state, Qubit::Q1, &mut || 0.37).unwrap();
        assert_eq!(high.bit, 1);
        assert!(approx_eq(high.state[2], Complex64::new(0.0, 1.0), 1e-12));
        assert_relative_eq!(high.probability(), 0.64, epsilon = 1e-12);
    }

    #[test]
    fn test_bell_collapse_correlates() {
        let bell = StateVector::bell_phi_plus();
        let outcome = measure(&bell, Qubit::Q0, &mut || 0.9).unwrap();
        assert_eq!(outcome.bit, 1);
        assert!(approx_eq(outcome.state[3], ONE, 1e-12));

        // The other qubit is now certain
        let second = measure(&outcome.state, Qubit::Q1, &mut || 0.0).unwrap();
        assert_eq!(second.bit, 1);
    }

    #[test]
    fn test_collapse_keeps_relative_phase() {
        let state = StateVector::normalize([ONE, ZERO, Complex64::new(0.0, 1.0), ONE]).unwrap();
        let collapsed = collapse(&state, Qubit::Q0, 0).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(collapsed[0], Complex64::new(h, 0.0), 1e-12));
        assert!(approx_eq(collapsed[2], Complex64::new(0.0, h), 1e-12));
    }

    #[test]
    fn test_collapse_onto_impossible_outcome() {
        let err = collapse(&StateVector::default(), Qubit::Q1, 1).unwrap_err();
        assert!(matches!(err, StateError::ZeroNorm { .. }));
    }

    #[test]
    fn test_frequencies_follow_probabilities() {
        let state = StateVector::normalize([
            Complex64::new(0.5, 0.0),
            Complex64::new(0.5, 0.0),
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, 0.5),
        ])
        .unwrap();
        let mut rng = TestRng::new(7);
        let shots = 10000;
        let ones = (0..shots)
            .filter(|_| measure(&state, Qubit::Q0, &mut || rng.next()).unwrap().bit == 1)
            .count();
        let freq = ones as f64 / shots as f64;
        assert!((freq - 0.5).abs() < 0.03, "frequency {} too far from 0.5", freq);
    }
}
