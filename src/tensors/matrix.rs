use std::{
    array,
    fmt::Display,
    ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign},
    slice,
};

use log::debug;

use crate::{
    arithmetic,
    domains::{Promote, Promoted, Scalar},
    printer::{format_rows, MatrixPrinter, PrintOptions},
    tensors::AlgebraicContainer,
};

/// A matrix with `R` rows and `C` columns whose entries are scalars of type `T`.
/// The shape is part of the type, so operations on operands of incompatible
/// shapes do not compile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FixedMatrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T: Scalar, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Create a new zeroed matrix.
    pub fn new() -> Self {
        FixedMatrix {
            data: array::from_fn(|_| array::from_fn(|_| T::zero())),
        }
    }

    /// Create a matrix from its rows.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        FixedMatrix { data: rows }
    }

    /// Convert a row-major linear representation of a matrix to a `FixedMatrix`.
    pub fn from_linear(data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != R * C {
            return Err(MatrixError::ShapeMismatch { nrows: R, ncols: C });
        }

        Ok(FixedMatrix {
            data: array::from_fn(|i| array::from_fn(|j| data[i * C + j].clone())),
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(matrix: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        if matrix.len() != R || matrix.iter().any(|r| r.len() != C) {
            return Err(MatrixError::ShapeMismatch { nrows: R, ncols: C });
        }

        Ok(FixedMatrix {
            data: array::from_fn(|i| array::from_fn(|j| matrix[i][j].clone())),
        })
    }

    /// Return the number of rows.
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Return the number of columns.
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Get the entry at `row` and `col`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .ok_or(MatrixError::IndexOutOfBounds {
                index: (row, col),
                shape: (R, C),
            })
    }

    /// Set the entry at `row` and `col`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        match self.data.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(e) => {
                *e = value;
                Ok(())
            }
            None => Err(MatrixError::IndexOutOfBounds {
                index: (row, col),
                shape: (R, C),
            }),
        }
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> slice::Iter<'_, [T; C]> {
        self.data.iter()
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<U: Scalar>(&self, f: impl Fn(&T) -> U) -> FixedMatrix<U, R, C> {
        FixedMatrix {
            data: array::from_fn(|i| array::from_fn(|j| f(&self.data[i][j]))),
        }
    }

    fn zip_with<U: Scalar, V: Scalar>(
        &self,
        rhs: &FixedMatrix<U, R, C>,
        f: impl Fn(&T, &U) -> V,
    ) -> FixedMatrix<V, R, C> {
        FixedMatrix {
            data: array::from_fn(|i| array::from_fn(|j| f(&self.data[i][j], &rhs.data[i][j]))),
        }
    }

    /// Add two matrices entry by entry.
    pub fn add<U: Scalar>(&self, rhs: &FixedMatrix<U, R, C>) -> FixedMatrix<Promoted<T, U>, R, C>
    where
        T: Promote<U>,
    {
        self.zip_with(rhs, |a, b| arithmetic::add(a, b))
    }

    /// Subtract two matrices entry by entry.
    pub fn subtract<U: Scalar>(
        &self,
        rhs: &FixedMatrix<U, R, C>,
    ) -> FixedMatrix<Promoted<T, U>, R, C>
    where
        T: Promote<U>,
    {
        self.zip_with(rhs, |a, b| arithmetic::subtract(a, b))
    }

    /// Multiply two matrices.
    pub fn multiply<U: Scalar, const P: usize>(
        &self,
        rhs: &FixedMatrix<U, C, P>,
    ) -> FixedMatrix<Promoted<T, U>, R, P>
    where
        T: Promote<U>,
    {
        let mut m = FixedMatrix::<Promoted<T, U>, R, P>::new();

        for (i, row) in self.data.iter().enumerate() {
            for j in 0..P {
                let mut sum = <Promoted<T, U> as Scalar>::zero();
                for (k, e) in row.iter().enumerate() {
                    sum = sum + arithmetic::multiply(e, &rhs.data[k][j]);
                }
                m.data[i][j] = sum;
            }
        }

        m
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn scalar_multiply<U: Scalar>(&self, e: &U) -> FixedMatrix<Promoted<T, U>, R, C>
    where
        T: Promote<U>,
    {
        self.map(|ee| arithmetic::multiply(ee, e))
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> FixedMatrix<T, C, R> {
        FixedMatrix {
            data: array::from_fn(|j| array::from_fn(|i| self.data[i][j].clone())),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.data[row][col].clone()
    }

    /// Compute `a * b - c * d` for the entries at positions `a`, `b`, `c` and `d`.
    #[inline(always)]
    fn sub_mul_mul(
        &self,
        a: (usize, usize),
        b: (usize, usize),
        c: (usize, usize),
        d: (usize, usize),
    ) -> T {
        self.at(a.0, a.1) * self.at(b.0, b.1) - self.at(c.0, c.1) * self.at(d.0, d.1)
    }

    /// Compute the determinant of the matrix.
    ///
    /// Only square matrices of size 1, 2 and 3 are supported. Larger matrices
    /// yield [MatrixError::UnsupportedDimension].
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if R != C {
            Err(MatrixError::NotSquare { nrows: R, ncols: C })?;
        }

        match R {
            1 => Ok(self.at(0, 0)),
            2 => Ok(self.sub_mul_mul((0, 0), (1, 1), (0, 1), (1, 0))),
            3 => {
                let m0 = self.at(0, 0) * self.sub_mul_mul((1, 1), (2, 2), (1, 2), (2, 1));
                let m1 = self.at(0, 1) * self.sub_mul_mul((1, 2), (2, 0), (1, 0), (2, 2));
                let m2 = self.at(0, 2) * self.sub_mul_mul((1, 0), (2, 1), (1, 1), (2, 0));

                Ok(m0 + m1 + m2)
            }
            n => {
                debug!("No closed-form determinant for a {}x{} matrix", n, n);
                Err(MatrixError::UnsupportedDimension(n))
            }
        }
    }

    /// The determinant of the matrix with row `i` and column `j` removed.
    /// The matrix must be square with at most 3 rows.
    fn minor(&self, i: usize, j: usize) -> T {
        match R {
            1 => T::one(),
            2 => self.at((i + 1) % 2, (j + 1) % 2),
            _ => {
                let others = |k: usize| match k {
                    0 => (1, 2),
                    1 => (0, 2),
                    _ => (0, 1),
                };
                let (r0, r1) = others(i);
                let (c0, c1) = others(j);
                self.sub_mul_mul((r0, c0), (r1, c1), (r0, c1), (r1, c0))
            }
        }
    }

    /// Compute the inverse of a square matrix as the adjugate divided by the determinant.
    ///
    /// The determinant is converted to `f64` and the matrix is considered singular
    /// only if it is exactly zero. Nearly singular matrices therefore produce
    /// very large entries instead of an error.
    ///
    /// For integer types the determinant and the minors are computed in `T`, so
    /// entries whose products exceed the range of `T` overflow before the conversion.
    /// Use a wider type such as `i64` or [Integer](rug::Integer) for large entries.
    pub fn inverse(&self) -> Result<FixedMatrix<f64, C, R>, MatrixError> {
        let det = self.determinant()?.to_f64();
        if det == 0. {
            debug!("Cannot invert singular {}x{} matrix", R, C);
            return Err(MatrixError::Singular);
        }

        let mut m = FixedMatrix::<f64, C, R>::new();
        for i in 0..R {
            for j in 0..C {
                let minor = self.minor(i, j).to_f64();
                let cofactor = if (i + j) % 2 == 1 { -minor } else { minor };
                m.data[j][i] = cofactor / det;
            }
        }

        Ok(m)
    }
}

impl<T: Scalar, const N: usize> FixedMatrix<T, N, N> {
    /// Create a new square matrix with ones on the main diagonal and zeroes elsewhere.
    pub fn identity() -> Self {
        FixedMatrix {
            data: array::from_fn(|i| {
                array::from_fn(|j| if i == j { T::one() } else { T::zero() })
            }),
        }
    }

    /// Create a new matrix with the scalars `diag` on the main diagonal and zeroes elsewhere.
    pub fn eye(diag: [T; N]) -> Self {
        let mut m = FixedMatrix::new();
        for (i, e) in diag.into_iter().enumerate() {
            m.data[i][i] = e;
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for FixedMatrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        FixedMatrix::from_rows(rows)
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for FixedMatrix<T, R, C> {
    type Output = [T; C];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for FixedMatrix<T, R, C> {
    type Output = T;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0][index.1]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for FixedMatrix<T, R, C> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.data[index.0][index.1]
    }
}

impl<T: Scalar, const R: usize, const C: usize> AlgebraicContainer for FixedMatrix<T, R, C> {
    type Element = T;

    fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    fn zeroed() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(|e| e.is_zero())
    }

    fn format<W: std::fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> std::fmt::Result {
        format_rows(self.data.iter().map(|r| r.as_slice()), opts, f)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new(self).fmt(f)
    }
}

impl<T: Promote<U>, U: Scalar, const R: usize, const C: usize> Add<&FixedMatrix<U, R, C>>
    for &FixedMatrix<T, R, C>
{
    type Output = FixedMatrix<Promoted<T, U>, R, C>;

    /// Add two matrices.
    fn add(self, rhs: &FixedMatrix<U, R, C>) -> Self::Output {
        FixedMatrix::add(self, rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&FixedMatrix<T, R, C>>
    for FixedMatrix<T, R, C>
{
    /// Add two matrices in place.
    fn add_assign(&mut self, rhs: &FixedMatrix<T, R, C>) {
        for (a, b) in self.data.iter_mut().flatten().zip(rhs.data.iter().flatten()) {
            *a = a.clone() + b.clone();
        }
    }
}

impl<T: Promote<U>, U: Scalar, const R: usize, const C: usize> Sub<&FixedMatrix<U, R, C>>
    for &FixedMatrix<T, R, C>
{
    type Output = FixedMatrix<Promoted<T, U>, R, C>;

    /// Subtract two matrices.
    fn sub(self, rhs: &FixedMatrix<U, R, C>) -> Self::Output {
        FixedMatrix::subtract(self, rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&FixedMatrix<T, R, C>>
    for FixedMatrix<T, R, C>
{
    /// Subtract two matrices in place.
    fn sub_assign(&mut self, rhs: &FixedMatrix<T, R, C>) {
        for (a, b) in self.data.iter_mut().flatten().zip(rhs.data.iter().flatten()) {
            *a = a.clone() - b.clone();
        }
    }
}

impl<T: Promote<U>, U: Scalar, const R: usize, const C: usize, const P: usize>
    Mul<&FixedMatrix<U, C, P>> for &FixedMatrix<T, R, C>
{
    type Output = FixedMatrix<Promoted<T, U>, R, P>;

    /// Multiply two matrices.
    fn mul(self, rhs: &FixedMatrix<U, C, P>) -> Self::Output {
        FixedMatrix::multiply(self, rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for FixedMatrix<T, R, C> {
    type Output = FixedMatrix<T, R, C>;

    /// Multiply each entry by the scalar `rhs`.
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|e| e.clone() * rhs.clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for FixedMatrix<T, R, C> {
    type Output = FixedMatrix<T, R, C>;

    /// Negate each entry of the matrix.
    fn neg(self) -> Self::Output {
        self.map(|e| -e.clone())
    }
}

/// Errors that can occur when performing matrix and vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    NotSquare {
        nrows: usize,
        ncols: usize,
    },
    /// The closed-form algorithms only exist for matrices up to 3x3.
    UnsupportedDimension(usize),
    Singular,
    LengthMismatch {
        expected: usize,
        found: usize,
    },
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },
    DivisionByZero,
    ShapeMismatch {
        nrows: usize,
        ncols: usize,
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "The matrix is not square: ({},{})", nrows, ncols)
            }
            MatrixError::UnsupportedDimension(n) => {
                write!(f, "The matrix is not 1x1, 2x2, or 3x3: ({},{})", n, n)
            }
            MatrixError::Singular => write!(f, "The matrix is singular"),
            MatrixError::LengthMismatch { expected, found } => write!(
                f,
                "Vectors do not have a compatible dimension: expected {}, found {}",
                expected, found
            ),
            MatrixError::IndexOutOfBounds { index, shape } => write!(
                f,
                "Index ({},{}) is out of bounds for shape ({},{})",
                index.0, index.1, shape.0, shape.1
            ),
            MatrixError::DivisionByZero => write!(f, "Division by zero"),
            MatrixError::ShapeMismatch { nrows, ncols } => write!(
                f,
                "Data does not match matrix dimensions ({},{})",
                nrows, ncols
            ),
        }
    }
}

impl std::error::Error for MatrixError {}
