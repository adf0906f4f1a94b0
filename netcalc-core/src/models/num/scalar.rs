use super::Num;
use num_traits::Signed;
use std::fmt;

#[cfg(feature = "bigrational")]
pub use num_rational::BigRational;
#[cfg(feature = "rational")]
pub use num_rational::Rational64;

/// The magnitude type carried by [`Num::Finite`].
///
/// A scalar supplies exact construction from integers and integer ratios,
/// and the ordered-field operations the kernel's finite/finite arms delegate
/// to. Exact domains (the rationals) represent every finite value
/// faithfully; approximate domains ([`f64`]) additionally override
/// [`Scalar::into_num`] so a value that escapes the finite range (an IEEE
/// infinity or NaN produced by overflow) is re-classified into the proper
/// [`Num`] variant instead of hiding inside [`Num::Finite`].
pub trait Scalar: Clone + fmt::Debug + fmt::Display + PartialOrd + Signed {
    /// Creates the scalar for a whole number.
    fn from_integer(value: i64) -> Self;

    /// Creates the scalar `numerator / denominator`, or `None` when the
    /// denominator is zero.
    fn from_ratio(numerator: i64, denominator: i64) -> Option<Self>;

    /// Wraps the scalar in a numeric variant.
    fn into_num(self) -> Num<Self> {
        Num::Finite(self)
    }
}

#[cfg(feature = "rational")]
impl Scalar for Rational64 {
    fn from_integer(value: i64) -> Self {
        Rational64::from_integer(value)
    }

    fn from_ratio(numerator: i64, denominator: i64) -> Option<Self> {
        (denominator != 0).then(|| Rational64::new(numerator, denominator))
    }
}

#[cfg(feature = "bigrational")]
impl Scalar for BigRational {
    fn from_integer(value: i64) -> Self {
        BigRational::from_integer(num_bigint::BigInt::from(value))
    }

    fn from_ratio(numerator: i64, denominator: i64) -> Option<Self> {
        (denominator != 0).then(|| {
            BigRational::new(
                num_bigint::BigInt::from(numerator),
                num_bigint::BigInt::from(denominator),
            )
        })
    }
}

#[cfg(feature = "float")]
impl Scalar for f64 {
    fn from_integer(value: i64) -> Self {
        value as f64
    }

    fn from_ratio(numerator: i64, denominator: i64) -> Option<Self> {
        (denominator != 0).then(|| numerator as f64 / denominator as f64)
    }

    fn into_num(self) -> Num<Self> {
        if self.is_nan() {
            Num::Undefined
        } else if self == f64::INFINITY {
            Num::PositiveInfinity
        } else if self == f64::NEG_INFINITY {
            Num::NegativeInfinity
        } else {
            Num::Finite(self)
        }
    }
}
