//! Mathlib is a small linear algebra library for matrices and vectors whose
//! dimensions are known at compile time.
//!
//! Entries can be machine integers, floats or the arbitrary-precision
//! [Integer](rug::Integer) and [Rational](rug::Rational) types. Combining two
//! containers with different entry types promotes the result to the wider type.
//!
//! For example:
//!
//! ```
//! use mathlib::{matrix, FixedMatrix};
//!
//! let a = matrix![[1i32, 2], [3, 4]];
//! let b: FixedMatrix<f64, 2, 2> = matrix![[0.5, 0.], [0., 0.5]];
//!
//! let c = a.multiply(&b);
//! assert_eq!(c.to_string(), "[[0.5, 1], [1.5, 2]]");
//!
//! let inv = a.inverse().unwrap();
//! assert_eq!(inv, matrix![[-2., 1.], [1.5, -0.5]]);
//! ```

pub mod arithmetic;
pub mod domains;
pub mod printer;
pub mod tensors;

pub use domains::{Promote, Promoted, Real, Scalar};
pub use printer::PrintOptions;
pub use tensors::{
    matrix::{FixedMatrix, MatrixError},
    vector::FixedVector,
    AlgebraicContainer,
};
