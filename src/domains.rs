//! Defines the numeric traits that the fixed-size containers are generic over.
//!
//! The core trait is [Scalar], which provides the ring operations the matrix and
//! vector algorithms need: addition, subtraction, multiplication, negation and a
//! zero test. Scalars that also support a square root implement [Real].
//!
//! Combining two different scalar types is governed by [Promote]. For example:
//! - `i32` combined with `f64` yields `f64`.
//! - `i64` combined with [Integer](rug::Integer) yields [Integer](rug::Integer).
//! - [Integer](rug::Integer) combined with [Rational](rug::Rational) yields [Rational](rug::Rational).
//!
//! The full table lives next to the implementations in [integer], [float] and [rational].
pub mod float;
pub mod integer;
pub mod rational;

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A number that can be stored in a [FixedMatrix](crate::tensors::matrix::FixedMatrix)
/// or a [FixedVector](crate::tensors::vector::FixedVector).
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    /// Convert to the nearest `f64`.
    fn to_f64(&self) -> f64;
    /// Return the result of dividing `self` by `rhs`, or `None` if the division
    /// is not defined for this type. Floating types never return `None`; a zero
    /// divisor yields an infinite or NaN result instead.
    fn try_div(&self, rhs: &Self) -> Option<Self>;
}

/// A scalar with a square root, computed in the scalar's own arithmetic.
/// For integer types this is the floor of the real square root.
pub trait Real: Scalar {
    fn sqrt(&self) -> Self;
}

/// Convert a scalar into a (wider) scalar type.
pub trait Lift<T> {
    fn lift(&self) -> T;
}

impl<T: Scalar> Lift<T> for T {
    #[inline(always)]
    fn lift(&self) -> T {
        self.clone()
    }
}

/// The rule that picks the result type of an operation on `Self` and `Rhs`.
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    type Output: Scalar;

    /// Convert the left-hand operand into the promoted type.
    fn promote(&self) -> <Self as Promote<Rhs>>::Output;
    /// Convert the right-hand operand into the promoted type.
    fn promote_rhs(rhs: &Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The promoted type of `T` combined with `U`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

impl<T: Scalar> Promote<T> for T {
    type Output = T;

    #[inline(always)]
    fn promote(&self) -> T {
        self.clone()
    }

    #[inline(always)]
    fn promote_rhs(rhs: &T) -> T {
        rhs.clone()
    }
}

/// Implement [Promote] in both directions for a pair of distinct scalar types,
/// using the [Lift] conversions into the output type.
macro_rules! impl_promote {
    ($($a:ty, $b:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;

                #[inline(always)]
                fn promote(&self) -> $out {
                    Lift::<$out>::lift(self)
                }

                #[inline(always)]
                fn promote_rhs(rhs: &$b) -> $out {
                    Lift::<$out>::lift(rhs)
                }
            }

            impl Promote<$a> for $b {
                type Output = $out;

                #[inline(always)]
                fn promote(&self) -> $out {
                    Lift::<$out>::lift(self)
                }

                #[inline(always)]
                fn promote_rhs(rhs: &$a) -> $out {
                    Lift::<$out>::lift(rhs)
                }
            }
        )*
    };
}

pub(crate) use impl_promote;

#[cfg(test)]
mod test {
    use rug::{Integer, Rational};

    use super::{Promote, Promoted, Scalar};

    fn promoted_zero<T: Promote<U>, U: Scalar>() -> Promoted<T, U> {
        <Promoted<T, U> as Scalar>::zero()
    }

    #[test]
    fn promotion_table() {
        let a: i64 = promoted_zero::<i32, i64>();
        let b: f32 = promoted_zero::<f32, i32>();
        let c: f64 = promoted_zero::<i64, f32>();
        let d: Integer = promoted_zero::<Integer, i32>();
        let e: Rational = promoted_zero::<i64, Rational>();
        let f: f64 = promoted_zero::<Rational, f64>();
        let g: i32 = promoted_zero::<i32, i32>();

        assert_eq!(a, 0);
        assert_eq!(b, 0.);
        assert_eq!(c, 0.);
        assert_eq!(d, 0);
        assert_eq!(e, 0);
        assert_eq!(f, 0.);
        assert_eq!(g, 0);
    }

    #[test]
    fn promote_values() {
        assert_eq!(<i32 as Promote<f64>>::promote(&3), 3.);
        assert_eq!(<i32 as Promote<f64>>::promote_rhs(&2.5), 2.5);
        assert_eq!(
            <Integer as Promote<Rational>>::promote(&Integer::from(7)),
            Rational::from(7)
        );
        assert_eq!(
            <Rational as Promote<Integer>>::promote_rhs(&Integer::from(-2)),
            Rational::from(-2)
        );
    }
}
