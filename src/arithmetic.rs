//! Binary operations on two scalars of possibly different types.
//!
//! Both operands are first converted to their [Promoted] type, so that
//! `add(&1i32, &0.5f64)` yields `1.5f64`.

use log::debug;

use crate::{
    domains::{Promote, Promoted, Scalar},
    tensors::matrix::MatrixError,
};

#[inline]
pub fn add<T: Promote<U>, U: Scalar>(a: &T, b: &U) -> Promoted<T, U> {
    a.promote() + T::promote_rhs(b)
}

#[inline]
pub fn subtract<T: Promote<U>, U: Scalar>(a: &T, b: &U) -> Promoted<T, U> {
    a.promote() - T::promote_rhs(b)
}

#[inline]
pub fn multiply<T: Promote<U>, U: Scalar>(a: &T, b: &U) -> Promoted<T, U> {
    a.promote() * T::promote_rhs(b)
}

/// Divide `a` by `b` in the promoted type.
///
/// Integer division truncates and fails for a zero divisor. Floating-point
/// division follows IEEE 754 and never fails.
pub fn divide<T: Promote<U>, U: Scalar>(a: &T, b: &U) -> Result<Promoted<T, U>, MatrixError> {
    a.promote().try_div(&T::promote_rhs(b)).ok_or_else(|| {
        debug!("Division of {} by zero", a);
        MatrixError::DivisionByZero
    })
}

#[cfg(test)]
mod test {
    use rug::{Integer, Rational};

    use crate::tensors::matrix::MatrixError;

    use super::{add, divide, multiply, subtract};

    #[test]
    fn mixed() {
        assert_eq!(add(&1i32, &0.5f64), 1.5);
        assert_eq!(subtract(&1i32, &2i64), -1i64);
        assert_eq!(multiply(&3i64, &0.5f32), 1.5f64);
        assert_eq!(multiply(&Integer::from(3), &2i32), Integer::from(6));
        assert_eq!(
            add(&Integer::from(1), &Rational::from((1, 2))),
            Rational::from((3, 2))
        );
    }

    #[test]
    fn division() {
        assert_eq!(divide(&7i32, &2i32), Ok(3));
        assert_eq!(divide(&7i32, &2f64), Ok(3.5));
        assert_eq!(divide(&1i64, &0i32), Err(MatrixError::DivisionByZero));
        assert_eq!(divide(&i32::MIN, &-1i32), Ok(i32::MIN));
        assert_eq!(
            divide(&Integer::from(1), &Rational::new()),
            Err(MatrixError::DivisionByZero)
        );
        assert_eq!(divide(&1f64, &0f64), Ok(f64::INFINITY));
        assert!(divide(&0f32, &0f32).unwrap().is_nan());
    }
}
