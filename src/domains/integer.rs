//! Machine integers and arbitrary-precision integers as scalars.
//!
//! | lhs     | rhs               | promoted  |
//! |---------|-------------------|-----------|
//! | i32     | i64               | i64       |
//! | i32     | f32               | f32       |
//! | i32/i64 | f64               | f64       |
//! | i64     | f32               | f64       |
//! | i32/i64 | [Integer]         | [Integer] |
//! | [Integer] | f64             | f64       |

use std::cmp::Ordering;

use rug::{Integer, Rational};

use super::{impl_promote, Lift, Promote, Real, Scalar};

macro_rules! impl_machine_integer {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                #[inline(always)]
                fn one() -> Self {
                    1
                }

                #[inline(always)]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline(always)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                /// Truncating division, `None` only for a zero divisor.
                /// `MIN / -1` wraps around to `MIN`.
                #[inline(always)]
                fn try_div(&self, rhs: &Self) -> Option<Self> {
                    if *rhs == 0 {
                        None
                    } else {
                        Some(<$t>::wrapping_div(*self, *rhs))
                    }
                }
            }

            impl Real for $t {
                /// The floor of the square root. Negative inputs yield `0`.
                #[inline]
                fn sqrt(&self) -> Self {
                    if *self <= 0 {
                        return 0;
                    }

                    // the float estimate can be off by one above 2^53
                    let x = *self as i128;
                    let mut r = (*self as f64).sqrt() as i128;
                    while r * r > x {
                        r -= 1;
                    }
                    while (r + 1) * (r + 1) <= x {
                        r += 1;
                    }
                    r as $t
                }
            }

            impl Lift<Integer> for $t {
                #[inline(always)]
                fn lift(&self) -> Integer {
                    Integer::from(*self)
                }
            }

            impl Lift<Rational> for $t {
                #[inline(always)]
                fn lift(&self) -> Rational {
                    Rational::from(*self)
                }
            }

            impl Lift<f64> for $t {
                #[inline(always)]
                fn lift(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_machine_integer!(i32, i64);

impl Lift<i64> for i32 {
    #[inline(always)]
    fn lift(&self) -> i64 {
        i64::from(*self)
    }
}

impl Lift<f32> for i32 {
    #[inline(always)]
    fn lift(&self) -> f32 {
        *self as f32
    }
}

impl Scalar for Integer {
    #[inline]
    fn zero() -> Self {
        Integer::new()
    }

    #[inline]
    fn one() -> Self {
        Integer::from(1)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.cmp0() == Ordering::Equal
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        Integer::to_f64(self)
    }

    /// Truncating division, `None` for a zero divisor.
    fn try_div(&self, rhs: &Self) -> Option<Self> {
        if Scalar::is_zero(rhs) {
            None
        } else {
            Some(Integer::from(self / rhs))
        }
    }
}

impl Real for Integer {
    /// The floor of the square root. Negative inputs yield `0`.
    fn sqrt(&self) -> Self {
        if self.cmp0() == Ordering::Less {
            Integer::new()
        } else {
            Integer::sqrt(self.clone())
        }
    }
}

impl Lift<Rational> for Integer {
    #[inline]
    fn lift(&self) -> Rational {
        Rational::from(self.clone())
    }
}

impl Lift<f64> for Integer {
    #[inline]
    fn lift(&self) -> f64 {
        Integer::to_f64(self)
    }
}

impl_promote!(
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, f32 => f64;
    i64, f64 => f64;
    i32, Integer => Integer;
    i64, Integer => Integer;
    Integer, f64 => f64;
);
