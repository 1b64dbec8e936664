use crate::Matrix;

impl Matrix {
    /// Rank by forward Gaussian elimination on a private copy.
    ///
    /// Pivots are compared against zero exactly. When no nonzero pivot exists
    /// at or below row `i` in the current pivot column, the scan moves on to
    /// the next row while staying in the same column.
    #[allow(clippy::float_cmp)]
    pub fn rank(&self) -> usize {
        let mut a = *self;
        let (rows, cols) = a.shape();
        let mut rank = 0;
        let mut i = 0;
        while i < rows && rank < cols {
            if a[(i, rank)] == 0.0 {
                if let Some(swap) = (i + 1..rows).find(|&r| a[(r, rank)] != 0.0) {
                    a.swap_rows(i, swap);
                }
            }
            let pivot = a[(i, rank)];
            if pivot != 0.0 {
                log::trace!("rank: pivot {} at ({}, {})", pivot, i, rank);
                for j in i + 1..rows {
                    let factor = a[(j, rank)] / pivot;
                    for k in rank..cols {
                        let v = a[(i, k)];
                        a[(j, k)] -= factor * v;
                    }
                }
                rank += 1;
            }
            i += 1;
        }
        rank
    }
}
