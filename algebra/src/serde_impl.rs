use crate::{error::MatrixError, Matrix};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;

/// Wire form of a [`Matrix`]: the logical shape and its rows.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl From<&Matrix> for MatrixRepr {
    fn from(m: &Matrix) -> Self {
        MatrixRepr {
            rows: m.rows(),
            cols: m.cols(),
            data: m.iter_rows().map(<[f64]>::to_vec).collect(),
        }
    }
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        let mut mat = Matrix::new(repr.rows, repr.cols)?;
        let actual = repr.data.iter().map(Vec::len).sum();
        if repr.data.len() != repr.rows || repr.data.iter().any(|row| row.len() != repr.cols) {
            return Err(MatrixError::DataLength {
                expected: repr.rows * repr.cols,
                actual,
            });
        }
        for (i, row) in repr.data.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                mat[(i, j)] = value;
            }
        }
        Ok(mat)
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRepr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::deserialize(deserializer)?;
        Matrix::try_from(repr).map_err(de::Error::custom)
    }
}
