use super::VecN;
use crate::error::MatrixError;
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// Largest number of rows or columns a [`Matrix`] can hold.
pub const MAX_DIM: usize = 10;

/// A dense `f64` matrix with a fixed backing capacity of `MAX_DIM x MAX_DIM`.
///
/// Only the top-left `rows x cols` window is part of the matrix. Everything
/// that reads a matrix (indexing, equality, formatting, serialization) sees
/// that window and nothing else; the backing store outside it is zero.
///
/// Matrices are plain values: every operation returns a new one.
#[derive(Copy, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: [VecN<MAX_DIM>; MAX_DIM],
}

impl Matrix {
    /// The degenerate 0x0 matrix.
    #[inline]
    pub const fn empty() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: [VecN::zero(); MAX_DIM],
        }
    }

    /// A zero-filled `rows x cols` matrix.
    pub fn zero(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows > MAX_DIM || cols > MAX_DIM {
            return Err(MatrixError::DimensionTooLarge { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            ..Matrix::empty()
        })
    }

    /// A fresh `rows x cols` matrix. Fresh matrices are always zero-filled,
    /// so this is [`Matrix::zero`].
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::zero(rows, cols)
    }

    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut mat = Matrix::zero(n, n)?;
        for i in 0..n {
            mat.data[i][i] = 1.0;
        }
        Ok(mat)
    }

    /// Builds a matrix from row slices. All rows must have the same length.
    ///
    /// ```
    /// use algebra::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut mat = Matrix::new(rows.len(), cols)?;
        let actual: usize = rows.iter().map(|row| row.as_ref().len()).sum();
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(MatrixError::DataLength {
                expected: rows.len() * cols,
                actual,
            });
        }
        for (dst, src) in mat.data.iter_mut().zip(rows) {
            dst[..cols].copy_from_slice(src.as_ref());
        }
        Ok(mat)
    }

    /// Builds a `rows x cols` matrix from `f(row, col)`. The shape must
    /// already be known to fit.
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        debug_assert!(rows <= MAX_DIM && cols <= MAX_DIM);
        let mut mat = Matrix {
            rows,
            cols,
            ..Matrix::empty()
        };
        for i in 0..rows {
            for j in 0..cols {
                mat.data[i][j] = f(i, j);
            }
        }
        mat
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix has no elements, which is how the sentinel
    /// functions signal failure.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The logical part of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        self.data[i].window(self.cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let cols = self.cols;
        self.data[..self.rows].iter().map(move |row| row.window(cols))
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Element `(i, j)`, or `None` outside the logical window.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i][j])
        } else {
            None
        }
    }

    /// Writes element `(i, j)`. Indices outside the logical window are an
    /// error and leave the matrix unchanged.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatrixError> {
        if i >= self.rows || j >= self.cols {
            return Err(self.out_of_bounds(i, j));
        }
        self.data[i][j] = value;
        Ok(())
    }

    /// Swaps rows `i` and `j` in place.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.rows && j < self.rows);
        self.data.swap(i, j);
    }

    /// Same shape and every element within `max_abs_diff`.
    pub fn abs_diff_eq(&self, other: &Matrix, max_abs_diff: f64) -> bool {
        self.shape() == other.shape()
            && self
                .iter_rows()
                .zip(other.iter_rows())
                .all(|(lhs, rhs)| {
                    lhs.iter()
                        .zip(rhs)
                        .all(|(l, r)| (l - r).abs() <= max_abs_diff)
                })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.iter_rows().eq(other.iter_rows())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &mut self.data[i][j]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.iter_rows().collect::<Vec<_>>())
            .finish()
    }
}

/// One line per row, each element left-aligned in an 8 wide field with two
/// decimals and no separator.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for value in row {
                write!(f, "{:<8.2}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
