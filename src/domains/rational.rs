//! Exact rational numbers as scalars.
//!
//! [Rational] absorbs every integer type and is absorbed by `f64`.
//! It does not implement [Real](super::Real), since its square root is not
//! rational in general.

use std::cmp::Ordering;

use rug::{Integer, Rational};

use super::{impl_promote, Lift, Promote, Scalar};

impl Scalar for Rational {
    #[inline]
    fn zero() -> Self {
        Rational::new()
    }

    #[inline]
    fn one() -> Self {
        Rational::from(1)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.cmp0() == Ordering::Equal
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }

    fn try_div(&self, rhs: &Self) -> Option<Self> {
        if Scalar::is_zero(rhs) {
            None
        } else {
            Some(Rational::from(self / rhs))
        }
    }
}

impl Lift<f64> for Rational {
    #[inline]
    fn lift(&self) -> f64 {
        Rational::to_f64(self)
    }
}

impl_promote!(
    i32, Rational => Rational;
    i64, Rational => Rational;
    Integer, Rational => Rational;
    Rational, f64 => f64;
);
