//! Property-based tests using proptest
//!
//! These tests check the invariants of the state engine for arbitrary
//! amplitudes within a bounded range.

use num_complex::Complex64;
use proptest::prelude::*;
use qbloch_state::*;

// ============================================================================
// Strategies
// ============================================================================

fn complex_strategy() -> impl Strategy<Value = Complex64> {
    (-10.0f64..10.0, -10.0f64..10.0).prop_map(|(re, im)| Complex64::new(re, im))
}

fn amplitudes_strategy() -> impl Strategy<Value = [Complex64; 4]> {
    prop::array::uniform4(complex_strategy())
}

// Same shapes spread over magnitudes up to 1e300
fn extreme_amplitudes_strategy() -> impl Strategy<Value = [Complex64; 4]> {
    (amplitudes_strategy(), 0i32..=300).prop_map(|(raw, exponent)| {
        let scale = 10f64.powi(exponent);
        raw.map(|a| a * scale)
    })
}

// Pairs bounded away from zero so they always normalize
fn pair_strategy() -> impl Strategy<Value = (Complex64, Complex64)> {
    (complex_strategy(), complex_strategy())
        .prop_filter("pair must be non-zero", |(a, b)| a.norm_sqr() + b.norm_sqr() > 1e-6)
}

fn state_strategy() -> impl Strategy<Value = StateVector> {
    amplitudes_strategy()
        .prop_filter("vector must be non-zero", |a| complex::norm(a) > 1e-6)
        .prop_map(|a| StateVector::normalize(a).unwrap())
}

// ============================================================================
// Normalization
// ============================================================================

proptest! {
    // Property: normalize yields unit squared-modulus sum
    #[test]
    fn test_normalize_unit_norm(raw in amplitudes_strategy()) {
        prop_assume!(complex::norm(&raw) > 1e-6);
        let state = StateVector::normalize(raw).unwrap();
        let total: f64 = state.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "sum of probabilities {}", total);
    }

    // Property: normalization is scale invariant, even where squares overflow
    #[test]
    fn test_normalize_extreme_magnitudes(raw in extreme_amplitudes_strategy()) {
        prop_assume!(complex::norm(&raw) > 1e-6);
        let state = StateVector::normalize(raw).unwrap();
        let total: f64 = state.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "sum of probabilities {}", total);
    }

    // Property: normalization only rescales
    #[test]
    fn test_normalize_preserves_direction(raw in amplitudes_strategy()) {
        let norm = complex::norm(&raw);
        prop_assume!(norm > 1e-6);
        let state = StateVector::normalize(raw).unwrap();
        for (a, r) in state.amplitudes().iter().zip(raw.iter()) {
            prop_assert!((a * norm - r).norm() < 1e-9);
        }
    }

    // Property: rescaling the input does not change the state
    #[test]
    fn test_normalize_scale_invariant(raw in amplitudes_strategy(), scale in 0.01f64..100.0) {
        prop_assume!(complex::norm(&raw) > 1e-6);
        let a = StateVector::normalize(raw).unwrap();
        let b = StateVector::normalize(raw.map(|c| c * scale)).unwrap();
        prop_assert!(a.approx_eq_up_to_phase(&b, 1e-9));
    }
}

#[test]
fn test_normalize_zero_vector_fails() {
    let zero = Complex64::new(0.0, 0.0);
    assert!(matches!(
        StateVector::normalize([zero; 4]),
        Err(StateError::ZeroNorm { .. })
    ));
}

// ============================================================================
// Separability
// ============================================================================

proptest! {
    // Property: products of single-qubit states are separable and factor back
    #[test]
    fn test_product_round_trip((alpha, beta) in pair_strategy(), (gamma, delta) in pair_strategy()) {
        let state = StateVector::from_alpha_beta(alpha, beta, gamma, delta).unwrap();
        let verdict = analyze(&state);
        let decomposition = verdict.decomposition();
        prop_assert!(decomposition.is_some(), "product classified entangled");
        let d = decomposition.unwrap();

        let q1 = SingleQubitState::new(alpha, beta).unwrap();
        let q0 = SingleQubitState::new(gamma, delta).unwrap();
        prop_assert!(d.qubit1.approx_eq_up_to_phase(&q1, 1e-9));
        prop_assert!(d.qubit0.approx_eq_up_to_phase(&q0, 1e-9));

        for (r, a) in d.reconstruct().iter().zip(state.amplitudes()) {
            prop_assert!((r - a).norm() < 1e-9);
        }
        prop_assert!(concurrence(&state) < 1e-9);
    }

    // Property: the verdict agrees with the concurrence away from the boundary
    #[test]
    fn test_verdict_matches_concurrence(state in state_strategy()) {
        let c = concurrence(&state);
        prop_assume!(c > 1e-3 || c < 1e-9);
        prop_assert_eq!(analyze(&state).is_separable(), c < 1e-9);
    }

    // Property: Schmidt coefficients are normalized and ordered
    #[test]
    fn test_schmidt_normalized(state in state_strategy()) {
        let [s1, s2] = schmidt_coefficients(&state);
        prop_assert!(s1 >= s2 && s2 >= 0.0);
        prop_assert!((s1 * s1 + s2 * s2 - 1.0).abs() < 1e-9);
    }
}

// ============================================================================
// Reduced Bloch projection
// ============================================================================

proptest! {
    // Property: reduced vectors lie in the unit ball and share their length
    #[test]
    fn test_bloch_ball_bound(state in state_strategy()) {
        let reduced = reduced_bloch(&state.to_density_matrix());
        let r0 = reduced.qubit0.magnitude();
        let r1 = reduced.qubit1.magnitude();
        prop_assert!(r0 <= 1.0 + 1e-9);
        prop_assert!(r1 <= 1.0 + 1e-9);
        prop_assert!((r0 - r1).abs() < 1e-9);

        // Pure two-qubit states: r² + C² = 1
        let c = concurrence(&state);
        prop_assert!((r0 * r0 + c * c - 1.0).abs() < 1e-9);
    }

    // Property: closed-form projection equals the explicit partial trace
    #[test]
    fn test_projection_matches_partial_trace(state in state_strategy()) {
        let rho = state.to_density_matrix();
        let reduced = reduced_bloch(&rho);
        for qubit in Qubit::ALL {
            let from_trace = BlochVector::from_density(&rho.reduced(qubit));
            let closed = reduced.get(qubit);
            prop_assert!((from_trace.x - closed.x).abs() < 1e-12);
            prop_assert!((from_trace.y - closed.y).abs() < 1e-12);
            prop_assert!((from_trace.z - closed.z).abs() < 1e-12);
        }
    }

    // Property: separable states put both reduced vectors on the sphere
    #[test]
    fn test_product_vectors_on_sphere((alpha, beta) in pair_strategy(), (gamma, delta) in pair_strategy()) {
        let state = StateVector::from_alpha_beta(alpha, beta, gamma, delta).unwrap();
        let reduced = reduced_bloch(&state.to_density_matrix());
        let q1 = SingleQubitState::new(alpha, beta).unwrap().bloch_vector();
        prop_assert!((reduced.qubit1.x - q1.x).abs() < 1e-9);
        prop_assert!((reduced.qubit1.y - q1.y).abs() < 1e-9);
        prop_assert!((reduced.qubit1.z - q1.z).abs() < 1e-9);
        prop_assert!((reduced.qubit0.magnitude() - 1.0).abs() < 1e-9);
    }
}

// ============================================================================
// Measurement
// ============================================================================

proptest! {
    // Property: outcome probabilities sum to one and collapse is consistent
    #[test]
    fn test_measurement_collapse(state in state_strategy(), sample in 0.0f64..1.0, q in 0usize..2) {
        let qubit = Qubit::try_from(q).unwrap();
        let outcome = measure(&state, qubit, &mut || sample).unwrap();
        prop_assert!((outcome.probability_zero + outcome.probability_one - 1.0).abs() < 1e-12);
        prop_assert_eq!(outcome.bit, if sample < outcome.probability_zero { 0 } else { 1 });

        // Measuring the same qubit again is certain
        let again = outcome.state.qubit_probability(qubit, outcome.bit);
        prop_assert!((again - 1.0).abs() < 1e-9);
    }
}
