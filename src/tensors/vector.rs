use std::{
    array,
    fmt::Display,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice,
};

use log::debug;

use crate::{
    arithmetic,
    domains::{Promote, Promoted, Real, Scalar},
    printer::{format_row, PrintOptions, VectorPrinter},
    tensors::{
        matrix::{FixedMatrix, MatrixError},
        AlgebraicContainer,
    },
};

/// An `N`-dimensional vector with entries of type `T`.
///
/// In products with a [FixedMatrix] the vector acts as a single row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FixedVector<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// Create a new zero vector.
    pub fn new() -> Self {
        FixedVector {
            data: array::from_fn(|_| T::zero()),
        }
    }

    /// Create a new vector from an array of scalars.
    pub fn from_array(data: [T; N]) -> Self {
        FixedVector { data }
    }

    /// Create a new vector from a list of scalars, whose length must be `N`.
    pub fn from_slice(data: &[T]) -> Result<Self, MatrixError> {
        if data.len() != N {
            return Err(MatrixError::LengthMismatch {
                expected: N,
                found: data.len(),
            });
        }

        Ok(FixedVector {
            data: array::from_fn(|i| data[i].clone()),
        })
    }

    /// Return the number of entries.
    pub const fn size(&self) -> usize {
        N
    }

    /// Get the `index`th entry.
    pub fn get(&self, index: usize) -> Result<T, MatrixError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(MatrixError::IndexOutOfBounds {
                index: (0, index),
                shape: (1, N),
            })
    }

    /// Set the `index`th entry.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), MatrixError> {
        match self.data.get_mut(index) {
            Some(e) => {
                *e = value;
                Ok(())
            }
            None => Err(MatrixError::IndexOutOfBounds {
                index: (0, index),
                shape: (1, N),
            }),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Create a row vector. This operation is very cheap.
    pub fn into_matrix(self) -> FixedMatrix<T, 1, N> {
        FixedMatrix { data: [self.data] }
    }

    /// Apply a function `f` to each entry of the vector.
    pub fn map<U: Scalar>(&self, f: impl Fn(&T) -> U) -> FixedVector<U, N> {
        FixedVector {
            data: array::from_fn(|i| f(&self.data[i])),
        }
    }

    fn zip_with<U: Scalar, V: Scalar>(
        &self,
        rhs: &FixedVector<U, N>,
        f: impl Fn(&T, &U) -> V,
    ) -> FixedVector<V, N> {
        FixedVector {
            data: array::from_fn(|i| f(&self.data[i], &rhs.data[i])),
        }
    }

    /// Add two vectors entry by entry.
    pub fn add<U: Scalar>(&self, rhs: &FixedVector<U, N>) -> FixedVector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        self.zip_with(rhs, |a, b| arithmetic::add(a, b))
    }

    /// Subtract two vectors entry by entry.
    pub fn subtract<U: Scalar>(&self, rhs: &FixedVector<U, N>) -> FixedVector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        self.zip_with(rhs, |a, b| arithmetic::subtract(a, b))
    }

    pub fn norm_squared(&self) -> T {
        let mut res = T::zero();
        for e in &self.data {
            res = res + e.clone() * e.clone();
        }
        res
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot_product<U: Scalar>(&self, rhs: &FixedVector<U, N>) -> Promoted<T, U>
    where
        T: Promote<U>,
    {
        let mut res = <Promoted<T, U> as Scalar>::zero();
        for (e1, e2) in self.data.iter().zip(&rhs.data) {
            res = res + arithmetic::multiply(e1, e2);
        }

        res
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross_product<U: Scalar>(
        &self,
        rhs: &FixedVector<U, N>,
    ) -> Result<FixedVector<Promoted<T, U>, 3>, MatrixError>
    where
        T: Promote<U>,
    {
        if N != 3 {
            return Err(MatrixError::LengthMismatch {
                expected: 3,
                found: N,
            });
        }

        let (a, b) = (&self.data, &rhs.data);
        Ok(FixedVector {
            data: [
                arithmetic::multiply(&a[1], &b[2]) - arithmetic::multiply(&a[2], &b[1]),
                arithmetic::multiply(&a[2], &b[0]) - arithmetic::multiply(&a[0], &b[2]),
                arithmetic::multiply(&a[0], &b[1]) - arithmetic::multiply(&a[1], &b[0]),
            ],
        })
    }

    /// Multiply the scalar `e` to each entry of the vector. The vector itself is not modified;
    /// use `*=` to scale in place.
    pub fn scalar_multiply<U: Scalar>(&self, e: &U) -> FixedVector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        self.map(|ee| arithmetic::multiply(ee, e))
    }

    fn row_product<U: Scalar, const P: usize>(&self, rows: &[[U; P]]) -> FixedVector<Promoted<T, U>, P>
    where
        T: Promote<U>,
    {
        FixedVector {
            data: array::from_fn(|i| {
                let mut sum = <Promoted<T, U> as Scalar>::zero();
                for (e, row) in self.data.iter().zip(rows) {
                    sum = sum + arithmetic::multiply(e, &row[i]);
                }
                sum
            }),
        }
    }

    /// Multiply the vector, as a single row, with the matrix `m`.
    pub fn multiply<U: Scalar, const P: usize>(
        &self,
        m: &FixedMatrix<U, N, P>,
    ) -> FixedVector<Promoted<T, U>, P>
    where
        T: Promote<U>,
    {
        self.row_product(&m.data)
    }

    /// Multiply the vector, as a single row, with a matrix given as a list of rows.
    /// The number of rows must be `N`.
    pub fn multiply_slice_rows<U: Scalar, const P: usize>(
        &self,
        rows: &[[U; P]],
    ) -> Result<FixedVector<Promoted<T, U>, P>, MatrixError>
    where
        T: Promote<U>,
    {
        if rows.len() != N {
            return Err(MatrixError::LengthMismatch {
                expected: N,
                found: rows.len(),
            });
        }

        Ok(self.row_product(rows))
    }
}

impl<T: Real, const N: usize> FixedVector<T, N> {
    /// Compute the Euclidean length in the arithmetic of `T`.
    /// For integer types the result is truncated.
    pub fn magnitude(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Divide each entry by the magnitude of the vector.
    ///
    /// A zero vector yields [MatrixError::DivisionByZero] for integer types
    /// and NaN entries for floating-point types.
    pub fn normalize(&self) -> Result<FixedVector<T, N>, MatrixError> {
        let mag = self.magnitude();

        let mut data = self.data.clone();
        for e in &mut data {
            *e = e.try_div(&mag).ok_or_else(|| {
                debug!("Cannot normalize a vector with magnitude {}", mag);
                MatrixError::DivisionByZero
            })?;
        }

        Ok(FixedVector { data })
    }
}

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        FixedVector::from_array(data)
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    /// Get the `i`th entry of the vector.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    /// Get the `i`th entry of the vector.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> AlgebraicContainer for FixedVector<T, N> {
    type Element = T;

    fn shape(&self) -> (usize, usize) {
        (1, N)
    }

    fn zeroed() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.iter().all(|e| e.is_zero())
    }

    fn format<W: std::fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> std::fmt::Result {
        format_row(&self.data, opts, f)
    }
}

impl<T: Scalar, const N: usize> Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        VectorPrinter::new(self).fmt(f)
    }
}

impl<T: Promote<U>, U: Scalar, const N: usize> Add<&FixedVector<U, N>> for &FixedVector<T, N> {
    type Output = FixedVector<Promoted<T, U>, N>;

    /// Add two vectors.
    fn add(self, rhs: &FixedVector<U, N>) -> Self::Output {
        FixedVector::add(self, rhs)
    }
}

impl<T: Scalar, const N: usize> AddAssign<&FixedVector<T, N>> for FixedVector<T, N> {
    /// Add two vectors in place.
    fn add_assign(&mut self, rhs: &FixedVector<T, N>) {
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = a.clone() + b.clone();
        }
    }
}

impl<T: Promote<U>, U: Scalar, const N: usize> Sub<&FixedVector<U, N>> for &FixedVector<T, N> {
    type Output = FixedVector<Promoted<T, U>, N>;

    /// Subtract two vectors.
    fn sub(self, rhs: &FixedVector<U, N>) -> Self::Output {
        FixedVector::subtract(self, rhs)
    }
}

impl<T: Scalar, const N: usize> SubAssign<&FixedVector<T, N>> for FixedVector<T, N> {
    fn sub_assign(&mut self, rhs: &FixedVector<T, N>) {
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = a.clone() - b.clone();
        }
    }
}

impl<T: Promote<U>, U: Scalar, const N: usize, const P: usize> Mul<&FixedMatrix<U, N, P>>
    for &FixedVector<T, N>
{
    type Output = FixedVector<Promoted<T, U>, P>;

    /// Multiply the row vector with a matrix.
    fn mul(self, rhs: &FixedMatrix<U, N, P>) -> Self::Output {
        FixedVector::multiply(self, rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = FixedVector<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|e| e.clone() * rhs.clone())
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for FixedVector<T, N> {
    /// Scale the vector in place.
    fn mul_assign(&mut self, rhs: T) {
        for e in &mut self.data {
            *e = e.clone() * rhs.clone();
        }
    }
}

impl<T: Scalar, const N: usize> Neg for FixedVector<T, N> {
    type Output = FixedVector<T, N>;

    /// Negate each entry of the vector.
    fn neg(self) -> Self::Output {
        self.map(|e| -e.clone())
    }
}
