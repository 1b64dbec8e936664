mod matrix;
mod vector;

pub use matrix::{Matrix, MAX_DIM};
pub(crate) use vector::VecN;

/// Sums `a[k] * b[k]` in index order, starting from zero.
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
}
