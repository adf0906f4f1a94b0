mod scalar;

#[cfg(feature = "bigrational")]
pub use scalar::BigRational;
#[cfg(feature = "rational")]
pub use scalar::Rational64;
pub use scalar::Scalar;

use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// A number extended with infinities and an undefined state.
///
/// Network calculus computes with saturated quantities (a curve may sit at
/// `+∞`, an unstable system has no finite bound), and subtracting one
/// saturated quantity from another is indeterminate. [`Num`] closes a
/// scalar domain under that arithmetic. Exactly one variant is active at a
/// time, and no operation ever fails; indeterminate results are the value
/// [`Num::Undefined`], which behaves like IEEE NaN: any operation touching
/// it yields it, and it compares unequal to everything, itself included.
///
/// Values are immutable; every operation returns a fresh value. Construct
/// finite values through [`Num::finite`] (or the ratio/integer
/// constructors), which lets approximate scalars re-classify non-finite
/// magnitudes; building a `Finite` variant around an IEEE infinity or NaN
/// directly violates the type's invariant.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Num<S> {
    /// An ordinary finite magnitude.
    Finite(S),
    /// The upper saturation point of the domain.
    PositiveInfinity,
    /// The lower saturation point of the domain.
    NegativeInfinity,
    /// An indeterminate result, e.g. `∞ − ∞` or `∞ / ∞`.
    Undefined,
}

impl<S: Scalar> Num<S> {
    /// Wraps a scalar magnitude.
    ///
    /// Approximate scalars classify IEEE infinities and NaN into the
    /// matching variant here, so `Finite` never carries them.
    pub fn finite(value: S) -> Self {
        value.into_num()
    }

    /// The exact whole number `value`.
    pub fn from_integer(value: i64) -> Self {
        S::from_integer(value).into_num()
    }

    /// The exact ratio `numerator / denominator`.
    ///
    /// A zero denominator saturates to `PositiveInfinity`, consistent with
    /// [`Num::div`].
    pub fn from_ratio(numerator: i64, denominator: i64) -> Self {
        match S::from_ratio(numerator, denominator) {
            Some(value) => value.into_num(),
            None => Num::PositiveInfinity,
        }
    }

    /// Exact zero.
    pub fn zero() -> Self {
        Num::Finite(S::zero())
    }

    /// The upper saturation point.
    pub fn positive_infinity() -> Self {
        Num::PositiveInfinity
    }

    /// The lower saturation point.
    pub fn negative_infinity() -> Self {
        Num::NegativeInfinity
    }

    /// The indeterminate value.
    pub fn undefined() -> Self {
        Num::Undefined
    }

    /// Returns true if this value holds a finite magnitude.
    pub fn is_finite(&self) -> bool {
        matches!(self, Num::Finite(_))
    }

    /// Returns true for either infinity.
    ///
    /// `Undefined` is neither finite nor infinite.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Num::PositiveInfinity | Num::NegativeInfinity)
    }

    /// Returns true for the undefined state.
    pub fn is_nan(&self) -> bool {
        matches!(self, Num::Undefined)
    }

    /// Returns true if the value is strictly below zero.
    pub fn lt_zero(&self) -> bool {
        match self {
            Num::Finite(v) => v.is_negative(),
            Num::NegativeInfinity => true,
            _ => false,
        }
    }

    /// Returns true if the value is strictly above zero.
    pub fn gt_zero(&self) -> bool {
        match self {
            Num::Finite(v) => v.is_positive(),
            Num::PositiveInfinity => true,
            _ => false,
        }
    }

    /// Returns true if the value is exact zero.
    pub fn eq_zero(&self) -> bool {
        matches!(self, Num::Finite(v) if v.is_zero())
    }

    /// Borrows the finite magnitude, if any.
    pub fn as_finite(&self) -> Option<&S> {
        match self {
            Num::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// Total addition.
    ///
    /// Colliding opposite infinities are `Undefined`; otherwise an infinite
    /// operand dominates with its sign.
    pub fn add(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _)
            | (_, Undefined)
            | (PositiveInfinity, NegativeInfinity)
            | (NegativeInfinity, PositiveInfinity) => Undefined,
            (PositiveInfinity, _) | (_, PositiveInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, NegativeInfinity) => NegativeInfinity,
            (Finite(a), Finite(b)) => (a.clone() + b.clone()).into_num(),
        }
    }

    /// Total subtraction.
    ///
    /// `∞ − ∞` with like signs is `Undefined`; otherwise an infinite
    /// operand dominates, with the subtrahend's sign flipped.
    pub fn sub(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _)
            | (_, Undefined)
            | (PositiveInfinity, PositiveInfinity)
            | (NegativeInfinity, NegativeInfinity) => Undefined,
            (PositiveInfinity, _) | (_, NegativeInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, PositiveInfinity) => NegativeInfinity,
            (Finite(a), Finite(b)) => (a.clone() - b.clone()).into_num(),
        }
    }

    /// Total multiplication.
    ///
    /// Infinities propagate by the sign rule, with zero counted as
    /// non-negative: `+∞ · 0 = +∞`. Two infinities multiply to an infinity,
    /// never to `Undefined`.
    pub fn mult(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => {
                NegativeInfinity
            }
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => {
                PositiveInfinity
            }
            (PositiveInfinity, Finite(v)) | (Finite(v), PositiveInfinity) => {
                if v.is_negative() {
                    NegativeInfinity
                } else {
                    PositiveInfinity
                }
            }
            (NegativeInfinity, Finite(v)) | (Finite(v), NegativeInfinity) => {
                if v.is_negative() {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
            (Finite(a), Finite(b)) => (a.clone() * b.clone()).into_num(),
        }
    }

    /// Saturating division.
    ///
    /// Division is total: a finite dividend over an exact zero divisor
    /// saturates to `PositiveInfinity` regardless of the dividend's sign;
    /// a finite value over either infinity is exact zero; an infinity over
    /// a finite value propagates by the sign rule; `∞ / ∞` is `Undefined`.
    pub fn div(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (PositiveInfinity | NegativeInfinity, PositiveInfinity | NegativeInfinity) => Undefined,
            (PositiveInfinity, Finite(v)) => {
                if v.is_negative() {
                    NegativeInfinity
                } else {
                    PositiveInfinity
                }
            }
            (NegativeInfinity, Finite(v)) => {
                if v.is_negative() {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
            (Finite(_), PositiveInfinity | NegativeInfinity) => Self::zero(),
            (Finite(a), Finite(b)) => {
                if b.is_zero() {
                    PositiveInfinity
                } else {
                    (a.clone() / b.clone()).into_num()
                }
            }
        }
    }

    /// Absolute difference; any infinite operand yields `PositiveInfinity`.
    pub fn diff(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (PositiveInfinity | NegativeInfinity, _) | (_, PositiveInfinity | NegativeInfinity) => {
                PositiveInfinity
            }
            (Finite(a), Finite(b)) => (a.clone() - b.clone()).abs().into_num(),
        }
    }

    /// The greater operand; `Undefined` is absorbing.
    pub fn max(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (PositiveInfinity, _) | (_, PositiveInfinity) => PositiveInfinity,
            (NegativeInfinity, v) | (v, NegativeInfinity) => v.clone(),
            (Finite(a), Finite(b)) => {
                if a >= b {
                    Finite(a.clone())
                } else {
                    Finite(b.clone())
                }
            }
        }
    }

    /// The lesser operand; `Undefined` is absorbing.
    pub fn min(&self, other: &Self) -> Self {
        use Num::*;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (NegativeInfinity, _) | (_, NegativeInfinity) => NegativeInfinity,
            (PositiveInfinity, v) | (v, PositiveInfinity) => v.clone(),
            (Finite(a), Finite(b)) => {
                if a <= b {
                    Finite(a.clone())
                } else {
                    Finite(b.clone())
                }
            }
        }
    }

    /// Absolute value; both infinities map to `PositiveInfinity`.
    pub fn abs(&self) -> Self {
        use Num::*;
        match self {
            Undefined => Undefined,
            PositiveInfinity | NegativeInfinity => PositiveInfinity,
            Finite(v) => v.abs().into_num(),
        }
    }

    /// Additive inverse; infinities swap sign.
    pub fn negate(&self) -> Self {
        use Num::*;
        match self {
            Undefined => Undefined,
            PositiveInfinity => NegativeInfinity,
            NegativeInfinity => PositiveInfinity,
            Finite(v) => (-v.clone()).into_num(),
        }
    }
}

// Equality deliberately violates reflexivity for `Undefined`, the same way
// IEEE NaN does, so `Num` implements `PartialEq` but not `Eq`.
impl<S: PartialEq> PartialEq for Num<S> {
    fn eq(&self, other: &Self) -> bool {
        use Num::*;
        match (self, other) {
            (Finite(a), Finite(b)) => a == b,
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => true,
            _ => false,
        }
    }
}

impl<S: PartialOrd> PartialOrd for Num<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Num::*;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => None,
            (Finite(a), Finite(b)) => a.partial_cmp(b),
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => {
                Some(Ordering::Equal)
            }
            (PositiveInfinity, _) | (_, NegativeInfinity) => Some(Ordering::Greater),
            (NegativeInfinity, _) | (_, PositiveInfinity) => Some(Ordering::Less),
        }
    }
}

impl<S: fmt::Display> fmt::Display for Num<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Finite(v) => v.fmt(f),
            Num::PositiveInfinity => f.write_str("inf"),
            Num::NegativeInfinity => f.write_str("-inf"),
            Num::Undefined => f.write_str("undefined"),
        }
    }
}
