use super::pwa::{Curve, CurveDto, CurveError};
use super::segment::LinearSegment;
use crate::models::{Num, Scalar};

/// An arrival curve: an upper bound on cumulative traffic admitted up to an
/// elapsed time.
///
/// On top of the base [`Curve`] invariants, an arrival curve is guaranteed
/// non-decreasing: no piece falls, and no breakpoint jumps downward.
/// Equality to the canonical zero-arrivals curve is a cheaply testable
/// state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        bound(
            serialize = "S: Scalar + serde::Serialize",
            deserialize = "S: Scalar + serde::Deserialize<'de>"
        ),
        try_from = "CurveDto<S>",
        into = "CurveDto<S>"
    )
)]
pub struct ArrivalCurve<S> {
    curve: Curve<S>,
}

impl<S: Scalar> ArrivalCurve<S> {
    /// Wraps a curve, checking that it is non-decreasing.
    pub fn new(curve: Curve<S>) -> Result<Self, CurveError> {
        for (index, segment) in curve.segments().iter().enumerate() {
            if segment.slope.lt_zero() {
                return Err(CurveError::Decreasing);
            }
            if let Some(next) = curve.segments().get(index + 1) {
                if next.y < segment.value_at(&next.x) {
                    return Err(CurveError::Decreasing);
                }
            }
        }
        Ok(Self { curve })
    }

    /// The canonical zero-arrivals curve.
    pub fn zero() -> Self {
        let segments = vec![LinearSegment::closed(Num::zero(), Num::zero(), Num::zero())];
        // A single flat segment at the origin satisfies every invariant.
        let curve = unsafe { Curve::new_unchecked(segments) };
        Self { curve }
    }

    /// Whether this is the canonical zero-arrivals curve.
    pub fn is_zero(&self) -> bool {
        self.curve.is_zero()
    }

    /// The underlying piecewise-affine curve.
    pub fn curve(&self) -> &Curve<S> {
        &self.curve
    }

    /// The cumulative traffic admitted up to `x`.
    pub fn evaluate(&self, x: &Num<S>) -> Num<S> {
        self.curve.evaluate(x)
    }

    /// See [`Curve::inverse_evaluate`].
    pub fn inverse_evaluate(&self, y: &Num<S>, right_continuous: bool) -> Num<S> {
        self.curve.inverse_evaluate(y, right_continuous)
    }

    /// The long-run arrival rate.
    pub fn ultimate_rate(&self) -> &Num<S> {
        self.curve.ultimate_rate()
    }
}

impl<S: Scalar> TryFrom<CurveDto<S>> for ArrivalCurve<S> {
    type Error = CurveError;

    fn try_from(value: CurveDto<S>) -> Result<Self, Self::Error> {
        Self::new(Curve::try_from(value)?)
    }
}

impl<S: Scalar> Into<CurveDto<S>> for ArrivalCurve<S> {
    fn into(self) -> CurveDto<S> {
        self.curve.into()
    }
}
