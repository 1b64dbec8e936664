use crate::{
    error::{MatrixError, Op},
    math::dot,
    Matrix,
};
use core::ops::Mul;

impl Matrix {
    fn ensure_same_shape(&self, rhs: &Matrix, op: Op) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(rhs, Op::Add)?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |i, j| {
            self[(i, j)] + rhs[(i, j)]
        }))
    }

    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(rhs, Op::Sub)?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |i, j| {
            self[(i, j)] - rhs[(i, j)]
        }))
    }

    /// Matrix product. `self.cols()` must equal `rhs.rows()`.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: Op::Mul,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let rhs_transpose = rhs.transpose();
        Ok(Matrix::from_fn(self.rows(), rhs.cols(), |i, j| {
            dot(self.row(i), rhs_transpose.row(j))
        }))
    }

    pub fn scale(&self, k: f64) -> Matrix {
        Matrix::from_fn(self.rows(), self.cols(), |i, j| k * self[(i, j)])
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols(), self.rows(), |i, j| self[(j, i)])
    }

    pub fn trace(&self) -> Result<f64, MatrixError> {
        self.ensure_square()?;
        Ok((0..self.rows()).fold(0.0, |trace, i| trace + self[(i, i)]))
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Self::Output {
        rhs.scale(self)
    }
}
