//! Human-readable rendering of matrices and vectors.
//!
//! A vector prints as `[1, 2, 3]` and a matrix as `[[1, 2], [3, 4]]`.
//! The [Display](std::fmt::Display) implementations of the containers
//! honor the formatter's precision (`{:.3}`) and use the multi-line matrix
//! layout for the alternate flag (`{:#}`).

use std::fmt::{self, Display, Write};

use crate::{
    domains::Scalar,
    tensors::{matrix::FixedMatrix, vector::FixedVector, AlgebraicContainer},
};

/// Various options for printing containers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// The number of digits after the decimal point for floating-point entries.
    pub precision: Option<usize>,
    /// Print every matrix row on its own line.
    pub pretty_matrix: bool,
}

impl PrintOptions {
    pub const fn new() -> Self {
        Self {
            precision: None,
            pretty_matrix: false,
        }
    }

    /// Print each matrix row on a new line.
    pub const fn pretty() -> PrintOptions {
        Self {
            pretty_matrix: true,
            ..Self::new()
        }
    }

    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn from_fmt(f: &fmt::Formatter) -> PrintOptions {
        PrintOptions::default().update_with_fmt(f)
    }

    pub fn update_with_fmt(mut self, f: &fmt::Formatter) -> Self {
        if let Some(p) = f.precision() {
            self.precision = Some(p);
        }

        if f.alternate() {
            self.pretty_matrix = true;
        }
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn format_element<T: Display, W: Write>(e: &T, opts: &PrintOptions, f: &mut W) -> fmt::Result {
    match opts.precision {
        Some(p) => write!(f, "{:.*}", p, e),
        None => write!(f, "{}", e),
    }
}

/// Write a single row as `[e0, e1, ...]`.
pub(crate) fn format_row<T: Display, W: Write>(
    row: &[T],
    opts: &PrintOptions,
    f: &mut W,
) -> fmt::Result {
    f.write_char('[')?;
    for (i, e) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        format_element(e, opts, f)?;
    }
    f.write_char(']')
}

/// Write a list of rows as `[[...], [...]]`.
pub(crate) fn format_rows<'a, T: Display + 'a, W: Write>(
    rows: impl Iterator<Item = &'a [T]>,
    opts: &PrintOptions,
    f: &mut W,
) -> fmt::Result {
    f.write_char('[')?;
    for (i, row) in rows.enumerate() {
        if i > 0 {
            if opts.pretty_matrix {
                f.write_str(",\n ")?;
            } else {
                f.write_str(", ")?;
            }
        }
        format_row(row, opts, f)?;
    }
    f.write_char(']')
}

/// A printer for matrices, suitable as an argument to [format!].
pub struct MatrixPrinter<'a, T: Scalar, const R: usize, const C: usize> {
    pub matrix: &'a FixedMatrix<T, R, C>,
    pub opts: PrintOptions,
}

impl<'a, T: Scalar, const R: usize, const C: usize> MatrixPrinter<'a, T, R, C> {
    pub fn new(matrix: &'a FixedMatrix<T, R, C>) -> MatrixPrinter<'a, T, R, C> {
        MatrixPrinter {
            matrix,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(
        matrix: &'a FixedMatrix<T, R, C>,
        opts: PrintOptions,
    ) -> MatrixPrinter<'a, T, R, C> {
        MatrixPrinter { matrix, opts }
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> Display for MatrixPrinter<'a, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = self.opts.update_with_fmt(f);
        self.matrix.format(&opts, f)
    }
}

/// A printer for vectors, suitable as an argument to [format!].
pub struct VectorPrinter<'a, T: Scalar, const N: usize> {
    pub vector: &'a FixedVector<T, N>,
    pub opts: PrintOptions,
}

impl<'a, T: Scalar, const N: usize> VectorPrinter<'a, T, N> {
    pub fn new(vector: &'a FixedVector<T, N>) -> VectorPrinter<'a, T, N> {
        VectorPrinter {
            vector,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(
        vector: &'a FixedVector<T, N>,
        opts: PrintOptions,
    ) -> VectorPrinter<'a, T, N> {
        VectorPrinter { vector, opts }
    }
}

impl<'a, T: Scalar, const N: usize> Display for VectorPrinter<'a, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = self.opts.update_with_fmt(f);
        self.vector.format(&opts, f)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        printer::{MatrixPrinter, PrintOptions, VectorPrinter},
        tensors::{matrix::FixedMatrix, vector::FixedVector, AlgebraicContainer},
    };

    #[test]
    fn options() {
        let m = FixedMatrix::from_rows([[1.5, 2.], [3., 4.26]]);

        assert_eq!(m.render(&PrintOptions::new()), "[[1.5, 2], [3, 4.26]]");
        assert_eq!(
            m.render(&PrintOptions::pretty().with_precision(1)),
            "[[1.5, 2.0],\n [3.0, 4.3]]"
        );
        assert_eq!(
            format!(
                "{}",
                MatrixPrinter::new_with_options(&m, PrintOptions::pretty())
            ),
            "[[1.5, 2],\n [3, 4.26]]"
        );
    }

    #[test]
    fn vectors() {
        let v = FixedVector::from_array([1, -2, 3]);
        assert_eq!(format!("{}", VectorPrinter::new(&v)), "[1, -2, 3]");

        let w = FixedVector::from_array([0.126f64]);
        assert_eq!(
            format!(
                "{}",
                VectorPrinter::new_with_options(&w, PrintOptions::new().with_precision(2))
            ),
            "[0.13]"
        );
        assert_eq!(FixedVector::<i32, 0>::new().to_string(), "[]");
    }
}
