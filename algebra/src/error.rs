//! Error types for matrix operations.

use thiserror::Error;

/// The operation a shape check was performed for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Convert,
}

/// Failure of a checked matrix operation.
///
/// The sentinel functions in [`crate::sentinel`] turn these into a logged
/// diagnostic and a degenerate return value instead.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum MatrixError {
    /// Operand shapes violate the conformance rule of `op`.
    #[error("shape mismatch in {op:?}: {left:?} and {right:?}")]
    ShapeMismatch {
        op: Op,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A square matrix was required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The determinant is exactly zero.
    #[error("matrix is singular")]
    Singular,

    /// Requested shape exceeds the fixed capacity.
    #[error("dimensions {rows}x{cols} exceed the maximum of {max}x{max}", max = crate::MAX_DIM)]
    DimensionTooLarge { rows: usize, cols: usize },

    /// Element index outside the logical window.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Row data does not fill the declared shape.
    #[error("expected {expected} elements, got {actual}")]
    DataLength { expected: usize, actual: usize },
}

#[test]
fn test_error_messages() {
    let err = MatrixError::ShapeMismatch {
        op: Op::Add,
        left: (2, 2),
        right: (3, 3),
    };
    assert_eq!(err.to_string(), "shape mismatch in Add: (2, 2) and (3, 3)");
    assert_eq!(
        MatrixError::NotSquare { rows: 2, cols: 3 }.to_string(),
        "matrix must be square, got 2x3"
    );
    assert_eq!(
        MatrixError::DimensionTooLarge { rows: 11, cols: 1 }.to_string(),
        "dimensions 11x1 exceed the maximum of 10x10"
    );
    assert_eq!(
        MatrixError::OutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        }
        .to_string(),
        "index (2, 0) out of range for 2x2 matrix"
    );
}
