//! Matrix operations on gate matrices
//!
//! Tensor products for lifting single-qubit gates onto the register,
//! multiplication, adjoint, and the unitarity check.
//!
//! # Example
//!
//! ```rust
//! use qbloch_gates::matrix_ops::{tensor_product, is_unitary};
//! use qbloch_gates::matrices::{HADAMARD, IDENTITY};
//!
//! // H ⊗ I acts on qubit 1
//! let h_on_qubit_1 = tensor_product(&HADAMARD, &IDENTITY);
//! assert!(is_unitary(&h_on_qubit_1, 1e-10));
//! ```

use crate::matrices::{Matrix2, Matrix4};
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Compute the tensor product A ⊗ B of two 2×2 matrices
///
/// `(A ⊗ B)[i][j] = A[i/2][j/2] · B[i%2][j%2]`, so `A` acts on qubit 1 and
/// `B` on qubit 0.
pub fn tensor_product(a: &Matrix2, b: &Matrix2) -> Matrix4 {
    let mut result = [[ZERO; 4]; 4];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = a[i / 2][j / 2] * b[i % 2][j % 2];
        }
    }
    result
}

/// 4×4 identity
pub fn identity4() -> Matrix4 {
    let mut matrix = [[ZERO; 4]; 4];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = ONE;
    }
    matrix
}

/// Multiply two matrices, C = A · B
pub fn matrix_multiply(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut result = [[ZERO; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Compute the adjoint (Hermitian conjugate), (A†)ᵢⱼ = (Aⱼᵢ)*
pub fn matrix_adjoint(matrix: &Matrix4) -> Matrix4 {
    let mut result = [[ZERO; 4]; 4];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = matrix[j][i].conj();
        }
    }
    result
}

/// Matrix-vector product, wᵢ = Σⱼ Aᵢⱼ vⱼ
pub fn matrix_vector(matrix: &Matrix4, vector: &[Complex64; 4]) -> [Complex64; 4] {
    let mut result = [ZERO; 4];
    for (i, out) in result.iter_mut().enumerate() {
        *out = matrix[i]
            .iter()
            .zip(vector.iter())
            .map(|(m, v)| m * v)
            .sum();
    }
    result
}

/// Largest entrywise deviation of U†U from the identity
pub fn unitarity_deviation(matrix: &Matrix4) -> f64 {
    let u_dagger_u = matrix_multiply(&matrix_adjoint(matrix), matrix);
    let identity = identity4();

    let mut deviation: f64 = 0.0;
    for i in 0..4 {
        for j in 0..4 {
            deviation = deviation.max((u_dagger_u[i][j] - identity[i][j]).norm());
        }
    }
    deviation
}

/// Check if a 4×4 matrix is unitary (U†U = I)
pub fn is_unitary(matrix: &Matrix4, tolerance: f64) -> bool {
    unitarity_deviation(matrix) <= tolerance
}

/// Check if a 2×2 matrix is unitary (U†U = I)
pub fn is_unitary_2x2(matrix: &Matrix2, tolerance: f64) -> bool {
    for i in 0..2 {
        for j in 0..2 {
            let mut sum = ZERO;
            for k in 0..2 {
                sum += matrix[k][i].conj() * matrix[k][j];
            }
            let expected = if i == j { ONE } else { ZERO };
            if (sum - expected).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Check if a matrix is Hermitian (A = A†)
pub fn is_hermitian(matrix: &Matrix4, tolerance: f64) -> bool {
    for i in 0..4 {
        for j in i..4 {
            if (matrix[i][j] - matrix[j][i].conj()).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(a: &Matrix4, b: &Matrix4) {
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(a[i][j].re, b[i][j].re, epsilon = 1e-12);
                assert_relative_eq!(a[i][j].im, b[i][j].im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_tensor_product_layout() {
        // X ⊗ I flips qubit 1: |00⟩ → |10⟩
        let x_i = tensor_product(&PAULI_X, &IDENTITY);
        assert_eq!(x_i[2][0], Complex64::new(1.0, 0.0));
        assert_eq!(x_i[1][0], ZERO);

        // I ⊗ X flips qubit 0: |00⟩ → |01⟩
        let i_x = tensor_product(&IDENTITY, &PAULI_X);
        assert_eq!(i_x[1][0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_cnot_conjugated_by_hadamards() {
        // (H⊗H) CNOT_10 (H⊗H) = CNOT_01
        let hh = tensor_product(&HADAMARD, &HADAMARD);
        let result = matrix_multiply(&hh, &matrix_multiply(&CNOT_10, &hh));
        assert_matrix_eq(&result, &CNOT_01);
    }

    #[test]
    fn test_swap_from_cnots() {
        let result = matrix_multiply(&CNOT_10, &matrix_multiply(&CNOT_01, &CNOT_10));
        assert_matrix_eq(&result, &SWAP);
    }

    #[test]
    fn test_adjoint_of_iswap() {
        let product = matrix_multiply(&matrix_adjoint(&ISWAP), &ISWAP);
        assert_matrix_eq(&product, &identity4());
        assert!(!is_hermitian(&ISWAP, 1e-12));
        assert!(is_hermitian(&CZ, 1e-12));
    }

    #[test]
    fn test_non_unitary_deviation() {
        let mut m = identity4();
        m[3][3] = Complex64::new(2.0, 0.0);
        assert_relative_eq!(unitarity_deviation(&m), 3.0, epsilon = 1e-12);
        assert!(!is_unitary(&m, 1e-9));
    }
}
