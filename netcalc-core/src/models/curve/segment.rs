use crate::models::{Num, Scalar};

/// One affine piece of a piecewise-affine curve.
///
/// A segment contributes the function values from its start abscissa
/// onward, until the next segment takes over: `f(t) = y + slope · (t − x)`.
/// A `left_open` piece excludes its own start abscissa and defines values
/// strictly after it; paired with a predecessor ending below `y`, this
/// models an instantaneous jump such as a burst.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSegment<S> {
    /// The abscissa where this piece begins.
    pub x: Num<S>,
    /// The function value at the start of the piece (the right limit when
    /// `left_open`).
    pub y: Num<S>,
    /// The rate at which the value grows past `x`.
    pub slope: Num<S>,
    /// Whether the piece excludes its own start abscissa.
    pub left_open: bool,
}

impl<S: Scalar> LinearSegment<S> {
    /// A segment through `(x, y)` with the given slope, including its start.
    pub fn closed(x: Num<S>, y: Num<S>, slope: Num<S>) -> Self {
        Self {
            x,
            y,
            slope,
            left_open: false,
        }
    }

    /// A segment through `(x, y)` with the given slope, excluding its start.
    pub fn open(x: Num<S>, y: Num<S>, slope: Num<S>) -> Self {
        Self {
            x,
            y,
            slope,
            left_open: true,
        }
    }

    /// The value of this piece's support line at `x`.
    pub fn value_at(&self, x: &Num<S>) -> Num<S> {
        self.y.add(&self.slope.mult(&x.sub(&self.x)))
    }

    /// Whether this piece defines the function value at `x`.
    pub(crate) fn defines(&self, x: &Num<S>) -> bool {
        if self.left_open {
            &self.x < x
        } else {
            &self.x <= x
        }
    }

    /// The abscissa where this segment's support line crosses `other`'s.
    ///
    /// Parallel lines yield `Undefined`.
    pub fn x_intersection_with(&self, other: &Self) -> Num<S> {
        if self.slope == other.slope {
            return Num::undefined();
        }
        // Equate y1 + s1(x − x1) and y2 + s2(x − x2), solve for x.
        let self_intercept = self.y.sub(&self.slope.mult(&self.x));
        let other_intercept = other.y.sub(&other.slope.mult(&other.x));
        other_intercept
            .sub(&self_intercept)
            .div(&self.slope.sub(&other.slope))
    }
}
