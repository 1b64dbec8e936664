//! Determinant and inverse by cofactor expansion.
//!
//! Both are O(n!) in the matrix dimension.

use crate::{error::MatrixError, Matrix};

#[inline]
fn sign(i: usize) -> f64 {
    if i % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

fn laplace_det(a: &Matrix) -> f64 {
    debug_assert!(a.is_square());
    match a.rows() {
        0 => 0.0,
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => (0..n).fold(0.0, |det, j| {
            det + sign(j) * a[(0, j)] * laplace_det(&a.submatrix(0, j))
        }),
    }
}

impl Matrix {
    /// The matrix with row `row` and column `col` removed.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the matrix.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix {
        assert!(
            row < self.rows() && col < self.cols(),
            "cannot remove ({}, {}) from a {}x{} matrix",
            row,
            col,
            self.rows(),
            self.cols()
        );
        Matrix::from_fn(self.rows() - 1, self.cols() - 1, |i, j| {
            let src_i = if i < row { i } else { i + 1 };
            let src_j = if j < col { j } else { j + 1 };
            self[(src_i, src_j)]
        })
    }

    /// Signed minor of element `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.ensure_square()?;
        Ok(sign(row + col) * laplace_det(&self.submatrix(row, col)))
    }

    /// Determinant by recursive expansion along the first row. The empty
    /// matrix, an empty sum, has determinant 0.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.ensure_square()?;
        Ok(laplace_det(self))
    }

    /// Inverse as the adjugate divided by the determinant. A determinant of
    /// exactly zero is reported as singular; there is no tolerance.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.ensure_square()?;
        let det = laplace_det(self);
        if det == 0.0 {
            return Err(MatrixError::Singular);
        }
        let n = self.rows();
        if n == 1 {
            return Ok(Matrix::from_fn(1, 1, |_, _| 1.0 / det));
        }
        Ok(Matrix::from_fn(n, n, |j, i| {
            sign(i + j) * laplace_det(&self.submatrix(i, j)) / det
        }))
    }
}
