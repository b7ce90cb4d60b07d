//! Floating-point scalars.
//!
//! Division never fails for floats: a zero divisor produces an infinity or NaN,
//! which is propagated into the result.

use super::{impl_promote, Lift, Promote, Real, Scalar};

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn zero() -> Self {
                    0.
                }

                #[inline(always)]
                fn one() -> Self {
                    1.
                }

                #[inline(always)]
                fn is_zero(&self) -> bool {
                    *self == 0.
                }

                #[inline(always)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                #[inline(always)]
                fn try_div(&self, rhs: &Self) -> Option<Self> {
                    Some(*self / *rhs)
                }
            }

            impl Real for $t {
                #[inline(always)]
                fn sqrt(&self) -> Self {
                    <$t>::sqrt(*self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl Lift<f64> for f32 {
    #[inline(always)]
    fn lift(&self) -> f64 {
        f64::from(*self)
    }
}

impl_promote!(
    f32, f64 => f64;
);
