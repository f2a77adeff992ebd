//! Validated two-qubit gate matrices and their application to states

use crate::matrices::{Matrix2, Matrix4, IDENTITY};
use crate::matrix_ops;
use num_complex::Complex64;
use qbloch_state::complex::ensure_finite;
use qbloch_state::{Qubit, Result, StateError, StateVector, DIMENSION};

/// Default entrywise tolerance on U†U − I
pub const DEFAULT_UNITARY_TOLERANCE: f64 = 1e-9;

/// A 4×4 matrix known to be unitary within the tolerance it was checked at
///
/// Constructors validate; operations that combine unitaries (adjoint,
/// compose, tensor of checked factors) stay unitary and skip the check.
///
/// # Example
///
/// ```
/// use qbloch_gates::{GateMatrix, matrices};
/// use qbloch_state::StateVector;
///
/// let cnot = GateMatrix::new(matrices::CNOT_10).unwrap();
/// let state = StateVector::basis(2).unwrap(); // |10⟩
/// let out = cnot.apply(&state).unwrap();
/// assert!((out.probabilities()[3] - 1.0).abs() < 1e-12); // |11⟩
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateMatrix {
    rows: Matrix4,
}

impl GateMatrix {
    /// Validate `rows` with [`DEFAULT_UNITARY_TOLERANCE`]
    pub fn new(rows: Matrix4) -> Result<Self> {
        Self::with_tolerance(rows, DEFAULT_UNITARY_TOLERANCE)
    }

    /// Validate `rows`, accepting at most `tolerance` deviation of U†U from I
    ///
    /// # Errors
    /// [`StateError::InvalidAmplitude`] for NaN/infinite entries (position is
    /// the row-major index), [`StateError::NotUnitary`] otherwise.
    pub fn with_tolerance(rows: Matrix4, tolerance: f64) -> Result<Self> {
        let flat: Vec<Complex64> = rows.iter().flatten().copied().collect();
        ensure_finite(&flat)?;

        let deviation = matrix_ops::unitarity_deviation(&rows);
        if deviation.is_nan() || deviation > tolerance {
            return Err(StateError::NotUnitary {
                deviation,
                tolerance,
            });
        }
        Ok(Self { rows })
    }

    /// Validate a matrix given as nested slices, as decoded from a payload
    pub fn from_rows<R: AsRef<[Complex64]>>(rows: &[R], tolerance: f64) -> Result<Self> {
        if rows.len() != DIMENSION {
            return Err(StateError::DimensionMismatch {
                expected: DIMENSION,
                actual: rows.len(),
            });
        }

        let mut matrix = [[Complex64::new(0.0, 0.0); DIMENSION]; DIMENSION];
        for (target, row) in matrix.iter_mut().zip(rows) {
            let row = row.as_ref();
            *target = row.try_into().map_err(|_| StateError::DimensionMismatch {
                expected: DIMENSION,
                actual: row.len(),
            })?;
        }
        Self::with_tolerance(matrix, tolerance)
    }

    /// Wrap a matrix that is unitary by construction, such as an exact
    /// constant or a tensor product of exact constants
    pub(crate) const fn from_exact_unitary(rows: Matrix4) -> Self {
        Self { rows }
    }

    pub fn identity() -> Self {
        Self {
            rows: matrix_ops::identity4(),
        }
    }

    /// Lift a single-qubit unitary onto `qubit`, identity on the other one
    pub fn on_qubit(single: &Matrix2, qubit: Qubit, tolerance: f64) -> Result<Self> {
        match qubit {
            Qubit::Q1 => Self::tensor(single, &IDENTITY, tolerance),
            Qubit::Q0 => Self::tensor(&IDENTITY, single, tolerance),
        }
    }

    /// `left ⊗ right`, where `left` acts on qubit 1 and `right` on qubit 0
    pub fn tensor(left: &Matrix2, right: &Matrix2, tolerance: f64) -> Result<Self> {
        Self::with_tolerance(matrix_ops::tensor_product(left, right), tolerance)
    }

    pub fn rows(&self) -> &Matrix4 {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.rows[row][col]
    }

    /// Hermitian conjugate, which for a unitary is its inverse
    pub fn adjoint(&self) -> Self {
        Self {
            rows: matrix_ops::matrix_adjoint(&self.rows),
        }
    }

    /// Gate equivalent to applying `self` and then `next`, i.e. `next · self`
    pub fn compose(&self, next: &GateMatrix) -> Self {
        Self {
            rows: matrix_ops::matrix_multiply(&next.rows, &self.rows),
        }
    }

    /// `new[i] = Σⱼ U[i][j] · state[j]`, renormalized against drift
    pub fn apply(&self, state: &StateVector) -> Result<StateVector> {
        StateVector::normalize(matrix_ops::matrix_vector(&self.rows, state.amplitudes()))
    }
}

impl Default for GateMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<Matrix4> for GateMatrix {
    type Error = StateError;

    fn try_from(rows: Matrix4) -> Result<Self> {
        Self::new(rows)
    }
}

/// Validate `matrix` and apply it to `state`
///
/// The input state is never modified; on error nothing is produced.
pub fn apply_gate(state: &StateVector, matrix: &Matrix4, tolerance: f64) -> Result<StateVector> {
    GateMatrix::with_tolerance(*matrix, tolerance)?.apply(state)
}
