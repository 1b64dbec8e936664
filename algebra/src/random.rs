use crate::{error::MatrixError, Matrix};
use rand::Rng;

/// A `rows x cols` matrix of values drawn uniformly from `[-1, 1)`.
pub fn random_matrix<R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Matrix, MatrixError> {
    let mut mat = Matrix::new(rows, cols)?;
    for i in 0..rows {
        for j in 0..cols {
            mat[(i, j)] = rng.gen_range(-1.0..1.0);
        }
    }
    Ok(mat)
}
