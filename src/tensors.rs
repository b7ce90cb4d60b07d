//! Fixed-size matrices and vectors.
//!
//! Both containers store their entries inline and carry their dimensions in the
//! type, so `FixedMatrix<T, 2, 3>` and `FixedMatrix<T, 3, 2>` are different types
//! and multiplying incompatible shapes is a compile error.
//!
//! ```
//! use mathlib::{fixed_vector, matrix};
//!
//! let m = matrix![[1i32, 2], [3, 4]];
//! let v = fixed_vector![1i32, 2];
//! assert_eq!(v.multiply(&m), fixed_vector![7, 10]);
//! assert_eq!(m.determinant(), Ok(-2));
//! ```

use std::fmt::{self, Display};

use crate::{domains::Scalar, printer::PrintOptions};

pub mod matrix;
pub mod vector;

/// Operations shared by all fixed-size containers.
pub trait AlgebraicContainer: Clone + PartialEq + Display {
    type Element: Scalar;

    /// The number of rows and columns. A vector is a single row.
    fn shape(&self) -> (usize, usize);
    /// Create a container with every entry set to zero.
    fn zeroed() -> Self;
    /// Return true iff every entry is zero.
    fn is_zero(&self) -> bool;
    /// Format the container with custom [PrintOptions].
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result;

    fn render(&self, opts: &PrintOptions) -> String {
        let mut s = String::new();
        self.format(opts, &mut s)
            .expect("Could not write to string");
        s
    }
}

/// Construct a [FixedMatrix](matrix::FixedMatrix) from its rows.
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::tensors::matrix::FixedMatrix::from_rows([$([$($x),*]),+])
    };
}

/// Construct a [FixedVector](vector::FixedVector) from its elements.
#[macro_export]
macro_rules! fixed_vector {
    ($($x:expr),* $(,)?) => {
        $crate::tensors::vector::FixedVector::from_array([$($x),*])
    };
}
