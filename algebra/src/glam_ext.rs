//! Conversions between [`Matrix`] and glam's double precision matrices.
//!
//! glam stores matrices by column, so `col(c)[r]` maps to `m[(r, c)]`.

use crate::{
    error::{MatrixError, Op},
    Matrix,
};
use glam::{DMat2, DMat3, DMat4};
use std::convert::TryFrom;

fn from_cols<const N: usize>(cols: [[f64; N]; N]) -> Matrix {
    Matrix::from_fn(N, N, |r, c| cols[c][r])
}

fn to_cols<const N: usize>(m: &Matrix) -> Result<[[f64; N]; N], MatrixError> {
    if m.shape() != (N, N) {
        return Err(MatrixError::ShapeMismatch {
            op: Op::Convert,
            left: m.shape(),
            right: (N, N),
        });
    }
    let mut cols = [[0.0; N]; N];
    for (c, col) in cols.iter_mut().enumerate() {
        for (r, value) in col.iter_mut().enumerate() {
            *value = m[(r, c)];
        }
    }
    Ok(cols)
}

impl From<DMat2> for Matrix {
    fn from(m: DMat2) -> Self {
        from_cols(m.to_cols_array_2d())
    }
}

impl From<DMat3> for Matrix {
    fn from(m: DMat3) -> Self {
        from_cols(m.to_cols_array_2d())
    }
}

impl From<DMat4> for Matrix {
    fn from(m: DMat4) -> Self {
        from_cols(m.to_cols_array_2d())
    }
}

impl TryFrom<Matrix> for DMat2 {
    type Error = MatrixError;
    fn try_from(m: Matrix) -> Result<Self, Self::Error> {
        Ok(DMat2::from_cols_array_2d(&to_cols(&m)?))
    }
}

impl TryFrom<Matrix> for DMat3 {
    type Error = MatrixError;
    fn try_from(m: Matrix) -> Result<Self, Self::Error> {
        Ok(DMat3::from_cols_array_2d(&to_cols(&m)?))
    }
}

impl TryFrom<Matrix> for DMat4 {
    type Error = MatrixError;
    fn try_from(m: Matrix) -> Result<Self, Self::Error> {
        Ok(DMat4::from_cols_array_2d(&to_cols(&m)?))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        error::{MatrixError, Op},
        random::random_matrix,
        Matrix,
    };
    use glam::{DMat2, DMat3, DMat4, DVec2, DVec3};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::convert::TryFrom;

    #[test]
    fn test_layout() {
        let g = DMat2::from_cols(DVec2::new(1.0, 3.0), DVec2::new(2.0, 4.0));
        let m = Matrix::from(g);
        assert_eq!(m, Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());
        assert_eq!(DMat2::try_from(m), Ok(g));
        assert_eq!(m.determinant(), Ok(g.determinant()));

        let g = DMat3::from_cols(
            DVec3::new(1.0, 4.0, 7.0),
            DVec3::new(2.0, 5.0, 8.0),
            DVec3::new(3.0, 6.0, 9.0),
        );
        assert_eq!(Matrix::from(g).row(2), &[7.0, 8.0, 9.0]);
        assert_eq!(Matrix::from(g).transpose(), Matrix::from(g.transpose()));
    }

    #[test]
    fn test_wrong_shape() {
        let m = Matrix::identity(3).unwrap();
        assert_eq!(
            DMat4::try_from(m),
            Err(MatrixError::ShapeMismatch {
                op: Op::Convert,
                left: (3, 3),
                right: (4, 4)
            })
        );
        assert!(DMat2::try_from(Matrix::new(2, 3).unwrap()).is_err());
    }

    #[test]
    fn test_against_glam() {
        let mut rng = Pcg32::seed_from_u64(0xdeadbeef);
        for _ in 0..10 {
            let m = random_matrix(4, 4, &mut rng).unwrap();
            let g = DMat4::try_from(m).unwrap();

            let det = m.determinant().unwrap();
            assert!((det - g.determinant()).abs() < 1e-12);

            let inv = DMat4::try_from(m.inverse().unwrap()).unwrap();
            assert!(inv.abs_diff_eq(g.inverse(), 1e-9));

            let product = Matrix::from(g * g);
            assert!(m.try_mul(&m).unwrap().abs_diff_eq(&product, 1e-12));
        }
    }
}
