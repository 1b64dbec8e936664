//! Dense `f64` matrices of bounded size.
//!
//! [`Matrix`] methods return `Result`s; [`sentinel`] offers the same
//! operations as free functions that log and return degenerate values.

mod cofactor;
pub mod error;
pub mod glam_ext;
mod math;
mod ops;
pub mod random;
mod rank;
pub mod sentinel;
mod serde_impl;

pub use error::MatrixError;
pub use math::{Matrix, MAX_DIM};
