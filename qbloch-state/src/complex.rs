//! Complex arithmetic helpers
//!
//! Addition, subtraction, multiplication, conjugation and modulus come straight
//! from [`Complex64`]. This module adds the fallible operations (division by a
//! vanishing modulus, phase extraction, vector normalization) so that they
//! surface [`StateError`] instead of silently producing NaN or infinity.

use crate::error::{Result, StateError};
use num_complex::Complex64;

pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// 1/√2
pub const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Moduli (and norms) at or below this are treated as zero
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Divide a complex number by a real scalar
///
/// # Errors
/// Returns [`StateError::DivisionByZero`] if `|scalar|` is below
/// [`ZERO_TOLERANCE`].
#[inline]
pub fn checked_div_scalar(value: Complex64, scalar: f64) -> Result<Complex64> {
    if scalar.abs() <= ZERO_TOLERANCE {
        return Err(StateError::DivisionByZero);
    }
    Ok(value / scalar)
}

/// Divide two complex numbers
///
/// # Errors
/// Returns [`StateError::DivisionByZero`] if the divisor has zero modulus.
#[inline]
pub fn checked_div(numerator: Complex64, divisor: Complex64) -> Result<Complex64> {
    if divisor.norm() <= ZERO_TOLERANCE {
        return Err(StateError::DivisionByZero);
    }
    Ok(numerator / divisor)
}

/// Unit-modulus phase factor `c / |c|`
pub fn phase_of(value: Complex64) -> Result<Complex64> {
    checked_div_scalar(value, value.norm())
}

/// Entrywise comparison within `tolerance` on both components
#[inline]
pub fn approx_eq(a: Complex64, b: Complex64, tolerance: f64) -> bool {
    (a.re - b.re).abs() <= tolerance && (a.im - b.im).abs() <= tolerance
}

/// Euclidean norm of a complex vector
///
/// Scaled by the largest modulus before squaring, so finite inputs far from
/// unit magnitude neither overflow nor underflow.
pub fn norm(values: &[Complex64]) -> f64 {
    let scale = values.iter().map(|a| a.norm()).fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let sum: f64 = values.iter().map(|a| (*a / scale).norm_sqr()).sum();
    scale * sum.sqrt()
}

/// Normalize a complex vector in place, returning the norm it had
///
/// # Errors
/// Returns [`StateError::ZeroNorm`] without touching `values` when the norm
/// is (numerically) zero, and [`StateError::InvalidAmplitude`] when it is
/// not representable as a finite `f64`.
pub fn normalize_in_place(values: &mut [Complex64]) -> Result<f64> {
    let norm = norm(values);
    if !norm.is_finite() {
        return Err(StateError::invalid_amplitude(
            0,
            format!("vector norm {norm} is not finite"),
        ));
    }
    if norm <= ZERO_TOLERANCE {
        return Err(StateError::ZeroNorm { norm });
    }
    for value in values.iter_mut() {
        *value /= norm;
    }
    Ok(norm)
}

/// Reject NaN or infinite components coming from upstream parsing
pub fn ensure_finite(values: &[Complex64]) -> Result<()> {
    for (position, value) in values.iter().enumerate() {
        if !value.re.is_finite() || !value.im.is_finite() {
            return Err(StateError::invalid_amplitude(
                position,
                format!("non-finite value ({}, {})", value.re, value.im),
            ));
        }
    }
    Ok(())
}
