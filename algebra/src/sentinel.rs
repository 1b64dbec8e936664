//! Free-function API with sentinel error reporting.
//!
//! Every function here mirrors a checked method on [`Matrix`], but instead of
//! returning an error it logs a diagnostic at `error` level and returns a
//! degenerate value: the 0x0 matrix for matrix results and `0.0` for scalar
//! results. A `0.0` from [`det_matrix`] or [`trace_matrix`] cannot be told
//! apart from a genuine zero; use the methods on [`Matrix`] when that matters.

use crate::{
    error::{MatrixError, Op},
    Matrix,
};

fn diagnostic(err: &MatrixError) -> &'static str {
    match err {
        MatrixError::ShapeMismatch { op: Op::Mul, .. } => {
            "The number of cols of matrix a must be equal to the number of rows of matrix b."
        }
        MatrixError::NotSquare { .. } => "The matrix must be a square matrix.",
        MatrixError::Singular => "The matrix is singular.",
        _ => "Matrix a and b must have the same rows and cols.",
    }
}

fn or_report<T>(result: Result<T, MatrixError>, sentinel: T) -> T {
    result.unwrap_or_else(|err| {
        log::debug!("{}", err);
        log::error!("Error: {}", diagnostic(&err));
        sentinel
    })
}

/// A zero-filled `rows x cols` matrix.
///
/// # Panics
///
/// Panics if either dimension exceeds [`crate::MAX_DIM`].
pub fn create_matrix(rows: usize, cols: usize) -> Matrix {
    match Matrix::new(rows, cols) {
        Ok(m) => m,
        Err(err) => panic!("create_matrix: {}", err),
    }
}

pub fn add_matrix(a: Matrix, b: Matrix) -> Matrix {
    or_report(a.try_add(&b), Matrix::empty())
}

pub fn sub_matrix(a: Matrix, b: Matrix) -> Matrix {
    or_report(a.try_sub(&b), Matrix::empty())
}

pub fn mul_matrix(a: Matrix, b: Matrix) -> Matrix {
    or_report(a.try_mul(&b), Matrix::empty())
}

pub fn scale_matrix(a: Matrix, k: f64) -> Matrix {
    a.scale(k)
}

pub fn transpose_matrix(a: Matrix) -> Matrix {
    a.transpose()
}

/// See [`Matrix::submatrix`].
pub fn get_submatrix(a: Matrix, row: usize, col: usize) -> Matrix {
    a.submatrix(row, col)
}

pub fn det_matrix(a: Matrix) -> f64 {
    or_report(a.determinant(), 0.0)
}

pub fn inv_matrix(a: Matrix) -> Matrix {
    or_report(a.inverse(), Matrix::empty())
}

pub fn rank_matrix(a: Matrix) -> usize {
    a.rank()
}

pub fn trace_matrix(a: Matrix) -> f64 {
    or_report(a.trace(), 0.0)
}

/// The text [`print_matrix`] writes.
pub fn format_matrix(a: Matrix) -> String {
    a.to_string()
}

/// Writes each row on its own line to stdout, every element in an 8 wide,
/// left-aligned, two decimal field.
pub fn print_matrix(a: Matrix) {
    print!("{}", a);
}
