use super::segment::LinearSegment;
use crate::models::{Num, Scalar};

/// A piecewise-affine function from elapsed time to cumulative quantity.
///
/// The function is represented as an ordered sequence of [`LinearSegment`];
/// past the last breakpoint it follows the last segment's slope without
/// bound (or stays flat when that slope is zero). Valid curves begin with a
/// closed segment at x = 0, keep their abscissae non-decreasing and their
/// values non-negative, and contain no undefined or infinite-slope pieces.
/// Values may saturate to `+∞`.
///
/// Two derived markers are fixed at construction instead of being
/// recomputed per query: the ultimate (asymptotic) affine rate, and whether
/// the segment list degenerates to the identically-zero function.
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
pub struct Curve<S> {
    segments: Vec<LinearSegment<S>>,
    ultimate_rate: Num<S>,
    zero: bool,
}

impl<S: Scalar> Curve<S> {
    /// Creates a curve from segments, validating all invariants.
    pub fn new(segments: Vec<LinearSegment<S>>) -> Result<Self, CurveError> {
        Self::try_from(CurveDto(segments))
    }

    /// Creates a curve without validating the segments.
    ///
    /// # Safety
    ///
    /// This function bypasses all validation checks; the caller must
    /// guarantee the segments satisfy every invariant enforced by
    /// [`Curve::try_from`]. The derived markers are still computed here.
    /// Evaluation and bound derivation assume valid curves and produce
    /// meaningless results otherwise.
    pub unsafe fn new_unchecked(segments: Vec<LinearSegment<S>>) -> Self {
        let ultimate_rate = segments
            .last()
            .map(|segment| segment.slope.clone())
            .unwrap_or_else(Num::zero);
        let zero = segments
            .iter()
            .all(|segment| segment.y.eq_zero() && segment.slope.eq_zero());
        Self {
            segments,
            ultimate_rate,
            zero,
        }
    }

    /// The number of affine pieces.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The `index`-th piece in x-order.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range; asking for a piece that does
    /// not exist is a defect in the caller.
    pub fn segment(&self, index: usize) -> &LinearSegment<S> {
        &self.segments[index]
    }

    /// All pieces in x-order.
    pub fn segments(&self) -> &[LinearSegment<S>] {
        &self.segments
    }

    /// The asymptotic affine rate: the slope of the final piece.
    pub fn ultimate_rate(&self) -> &Num<S> {
        &self.ultimate_rate
    }

    /// Whether this is the identically-zero function.
    pub fn is_zero(&self) -> bool {
        self.zero
    }

    /// The function value at `x`.
    ///
    /// The defining piece is the latest one whose start lies at or before
    /// `x`, where a left-open piece only defines values strictly after its
    /// start; at the foot of a jump the value therefore comes from the
    /// earlier piece. Querying below zero, or at an undefined abscissa,
    /// yields `Undefined`.
    pub fn evaluate(&self, x: &Num<S>) -> Num<S> {
        if x.is_nan() || x.lt_zero() {
            return Num::undefined();
        }
        match self.segments.iter().rev().find(|segment| segment.defines(x)) {
            Some(segment) => segment.value_at(x),
            None => Num::undefined(),
        }
    }

    /// The abscissa where the curve crosses the level `y`.
    ///
    /// With `right_continuous` false, this is the least `x` at which the
    /// curve first reaches `y`, where a jump attains every level it skips.
    /// With `right_continuous` true, it is the greatest `x` at which the
    /// curve is still at or below `y` (`PositiveInfinity` when the curve
    /// never exceeds `y`). The two conventions differ only at
    /// discontinuities and flat regions; bound derivation depends on the
    /// distinction. A level the curve never attains yields `Undefined`.
    pub fn inverse_evaluate(&self, y: &Num<S>, right_continuous: bool) -> Num<S> {
        if y.is_nan() {
            return Num::undefined();
        }
        if right_continuous {
            self.inverse_from_right(y)
        } else {
            self.inverse_from_left(y)
        }
    }

    fn inverse_from_left(&self, y: &Num<S>) -> Num<S> {
        for (index, segment) in self.segments.iter().enumerate() {
            if &segment.y >= y {
                return segment.x.clone();
            }
            if segment.slope.gt_zero() {
                let crossing = segment.x.add(&y.sub(&segment.y).div(&segment.slope));
                let in_range = match self.segments.get(index + 1) {
                    Some(next) => crossing <= next.x,
                    None => true,
                };
                if in_range {
                    return crossing;
                }
            }
        }
        Num::undefined()
    }

    fn inverse_from_right(&self, y: &Num<S>) -> Num<S> {
        for (index, segment) in self.segments.iter().enumerate().rev() {
            if &segment.y > y {
                continue;
            }
            return if segment.slope.gt_zero() {
                let crossing = segment.x.add(&y.sub(&segment.y).div(&segment.slope));
                match self.segments.get(index + 1) {
                    Some(next) => crossing.min(&next.x),
                    None => crossing,
                }
            } else {
                // A flat piece at or below the level: the curve first
                // exceeds y where the next piece starts, if ever.
                match self.segments.get(index + 1) {
                    Some(next) => next.x.clone(),
                    None => Num::positive_infinity(),
                }
            };
        }
        Num::undefined()
    }
}

/// DTO ensuring that curves deserialized from an untrusted source re-run
/// construction validation.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug)]
pub struct CurveDto<S>(pub Vec<LinearSegment<S>>);

impl<S: Scalar> Into<CurveDto<S>> for Curve<S> {
    fn into(self) -> CurveDto<S> {
        CurveDto(self.segments)
    }
}

impl<S: Scalar> TryFrom<CurveDto<S>> for Curve<S> {
    type Error = CurveError;

    /// Attempts to create a curve from a DTO, validating all invariants.
    ///
    /// # Validation
    ///
    /// 1. At least one segment is present
    /// 2. The first segment starts, closed, at x = 0
    /// 3. No coordinate is undefined; abscissae and slopes are finite
    /// 4. Abscissae are non-decreasing
    /// 5. The function is non-negative everywhere (an affine piece takes
    ///    its minimum at one of its ends, so the segment values and the
    ///    values carried into each following breakpoint are checked, plus
    ///    the sign of the final slope)
    fn try_from(value: CurveDto<S>) -> Result<Self, Self::Error> {
        let segments = value.0;
        let Some(first) = segments.first() else {
            return Err(CurveError::Empty);
        };
        if !first.x.eq_zero() || first.left_open {
            return Err(CurveError::OriginMissing);
        }
        for (index, segment) in segments.iter().enumerate() {
            if segment.x.is_nan() || segment.y.is_nan() || segment.slope.is_nan() {
                return Err(CurveError::UndefinedCoordinate);
            }
            if segment.x.is_infinite() {
                return Err(CurveError::UnboundedAbscissa);
            }
            if segment.slope.is_infinite() {
                return Err(CurveError::UnboundedSlope);
            }
            if segment.y.lt_zero() {
                return Err(CurveError::NegativeValue);
            }
            match segments.get(index + 1) {
                Some(next) => {
                    if next.x < segment.x {
                        return Err(CurveError::DecreasingAbscissa);
                    }
                    if segment.value_at(&next.x).lt_zero() {
                        return Err(CurveError::NegativeValue);
                    }
                }
                None => {
                    if segment.slope.lt_zero() {
                        return Err(CurveError::NegativeValue);
                    }
                }
            }
        }
        Ok(unsafe { Self::new_unchecked(segments) })
    }
}

/// Errors that can occur when creating or validating a curve.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Error when no segments are provided.
    #[error("no segments provided")]
    Empty,
    /// Error when the first segment does not start, closed, at x = 0.
    #[error("curve must begin with a closed segment at x = 0")]
    OriginMissing,
    /// Error when a coordinate is the undefined value.
    #[error("undefined coordinate encountered")]
    UndefinedCoordinate,
    /// Error when a segment starts at an infinite abscissa.
    #[error("segment abscissae must be finite")]
    UnboundedAbscissa,
    /// Error when a segment carries an infinite slope.
    #[error("segment slopes must be finite")]
    UnboundedSlope,
    /// Error when segment abscissae decrease.
    #[error("segments are not ordered by non-decreasing x")]
    DecreasingAbscissa,
    /// Error when the function takes a negative value.
    #[error("curve values must be non-negative")]
    NegativeValue,
    /// Error when a curve that must be non-decreasing decreases.
    #[error("curve must be non-decreasing")]
    Decreasing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rational64;

    type N = Num<Rational64>;

    fn n(value: i64) -> N {
        Num::from_integer(value)
    }

    fn q(numerator: i64, denominator: i64) -> N {
        Num::from_ratio(numerator, denominator)
    }

    /// Token-bucket shape: zero at the origin, then an instantaneous burst
    /// followed by a sustained rate.
    fn token_bucket(rate: i64, burst: i64) -> Curve<Rational64> {
        Curve::new(vec![
            LinearSegment::closed(n(0), n(0), n(0)),
            LinearSegment::open(n(0), n(burst), n(rate)),
        ])
        .unwrap()
    }

    /// Rate-latency shape: flat at zero until the latency, then a rate.
    fn rate_latency(rate: i64, latency: i64) -> Curve<Rational64> {
        Curve::new(vec![
            LinearSegment::closed(n(0), n(0), n(0)),
            LinearSegment::closed(n(latency), n(0), n(rate)),
        ])
        .unwrap()
    }

    #[test]
    fn empty_curves_are_rejected() {
        assert_eq!(Curve::<Rational64>::new(vec![]).unwrap_err(), CurveError::Empty);
    }

    #[test]
    fn curves_must_anchor_at_the_origin() {
        assert_eq!(
            Curve::new(vec![LinearSegment::closed(n(1), n(0), n(0))]).unwrap_err(),
            CurveError::OriginMissing
        );
        assert_eq!(
            Curve::new(vec![LinearSegment::open(n(0), n(0), n(0))]).unwrap_err(),
            CurveError::OriginMissing
        );
    }

    #[test]
    fn decreasing_abscissae_are_rejected() {
        assert_eq!(
            Curve::new(vec![
                LinearSegment::closed(n(0), n(0), n(0)),
                LinearSegment::closed(n(5), n(1), n(1)),
                LinearSegment::closed(n(3), n(2), n(1)),
            ])
            .unwrap_err(),
            CurveError::DecreasingAbscissa
        );
    }

    #[test]
    fn negative_values_are_rejected() {
        // negative breakpoint value
        assert_eq!(
            Curve::new(vec![LinearSegment::closed(n(0), n(-1), n(0))]).unwrap_err(),
            CurveError::NegativeValue
        );
        // a piece dipping below zero before the next breakpoint
        assert_eq!(
            Curve::new(vec![
                LinearSegment::closed(n(0), n(2), n(-1)),
                LinearSegment::closed(n(5), n(0), n(1)),
            ])
            .unwrap_err(),
            CurveError::NegativeValue
        );
        // a final piece falling without bound
        assert_eq!(
            Curve::new(vec![LinearSegment::closed(n(0), n(10), n(-1))]).unwrap_err(),
            CurveError::NegativeValue
        );
    }

    #[test]
    fn undefined_and_unbounded_coordinates_are_rejected() {
        assert_eq!(
            Curve::new(vec![LinearSegment::closed(n(0), N::undefined(), n(0))]).unwrap_err(),
            CurveError::UndefinedCoordinate
        );
        assert_eq!(
            Curve::new(vec![
                LinearSegment::closed(n(0), n(0), n(0)),
                LinearSegment::closed(N::positive_infinity(), n(0), n(0)),
            ])
            .unwrap_err(),
            CurveError::UnboundedAbscissa
        );
        assert_eq!(
            Curve::new(vec![LinearSegment::closed(n(0), n(0), N::positive_infinity())])
                .unwrap_err(),
            CurveError::UnboundedSlope
        );
    }

    #[test]
    fn infinite_values_are_allowed() {
        // a delayed-infinite-burst shape saturates to +∞
        let burst = Curve::new(vec![
            LinearSegment::closed(n(0), n(0), n(0)),
            LinearSegment::open(n(4), N::positive_infinity(), n(0)),
        ])
        .unwrap();
        assert_eq!(burst.evaluate(&n(4)), n(0));
        assert_eq!(burst.evaluate(&n(5)), N::positive_infinity());
    }

    #[test]
    fn evaluation_honors_left_open_jumps() {
        let curve = token_bucket(5, 25);
        // the burst sits just after the origin, not at it
        assert_eq!(curve.evaluate(&n(0)), n(0));
        assert_eq!(curve.evaluate(&q(1, 2)), q(55, 2));
        assert_eq!(curve.evaluate(&n(2)), n(35));
    }

    #[test]
    fn evaluation_extends_past_the_last_breakpoint() {
        let curve = rate_latency(20, 20);
        assert_eq!(curve.evaluate(&n(10)), n(0));
        assert_eq!(curve.evaluate(&n(20)), n(0));
        assert_eq!(curve.evaluate(&n(25)), n(100));
        assert_eq!(curve.evaluate(&n(1000)), n(19600));
    }

    #[test]
    fn evaluation_outside_the_domain_is_undefined() {
        let curve = rate_latency(20, 20);
        assert!(curve.evaluate(&n(-1)).is_nan());
        assert!(curve.evaluate(&N::undefined()).is_nan());
    }

    #[test]
    fn inverse_from_left_finds_the_first_attainment() {
        let curve = token_bucket(5, 25);
        // every level up to the burst is attained by the jump at the origin
        assert_eq!(curve.inverse_evaluate(&n(0), false), n(0));
        assert_eq!(curve.inverse_evaluate(&n(10), false), n(0));
        assert_eq!(curve.inverse_evaluate(&n(25), false), n(0));
        assert_eq!(curve.inverse_evaluate(&n(35), false), n(2));
    }

    #[test]
    fn inverse_from_right_finds_the_last_attainment() {
        let curve = rate_latency(20, 20);
        // the curve sits at zero through its whole latency
        assert_eq!(curve.inverse_evaluate(&n(0), true), n(20));
        assert_eq!(curve.inverse_evaluate(&n(25), true), q(85, 4));
    }

    #[test]
    fn inverse_conventions_agree_away_from_flats_and_jumps() {
        let curve = Curve::new(vec![
            LinearSegment::closed(n(0), n(0), n(2)),
            LinearSegment::closed(n(5), n(10), n(3)),
        ])
        .unwrap();
        for y in [n(0), n(4), n(10), n(16)] {
            let left = curve.inverse_evaluate(&y, false);
            let right = curve.inverse_evaluate(&y, true);
            assert_eq!(left, right);
            assert_eq!(curve.evaluate(&left), y);
        }
    }

    #[test]
    fn unattained_levels_have_no_inverse() {
        let curve = Curve::new(vec![
            LinearSegment::closed(n(0), n(0), n(0)),
            LinearSegment::open(n(0), n(25), n(0)),
        ])
        .unwrap();
        assert!(curve.inverse_evaluate(&n(40), false).is_nan());
        // from the right the saturated curve never exceeds the level
        assert_eq!(
            curve.inverse_evaluate(&n(40), true),
            N::positive_infinity()
        );
    }

    #[test]
    fn markers_are_derived_at_construction() {
        let curve = token_bucket(5, 25);
        assert_eq!(curve.ultimate_rate(), &n(5));
        assert!(!curve.is_zero());

        let flat = Curve::new(vec![LinearSegment::closed(n(0), n(0), n(0))]).unwrap();
        assert_eq!(flat.ultimate_rate(), &n(0));
        assert!(flat.is_zero());
    }

    #[test]
    fn positional_access() {
        let curve = token_bucket(5, 25);
        assert_eq!(curve.segment_count(), 2);
        assert_eq!(curve.segment(1).y, n(25));
        assert!(curve.segment(1).left_open);
    }

    #[test]
    #[should_panic]
    fn out_of_range_segment_access_panics() {
        let curve = token_bucket(5, 25);
        let _ = curve.segment(2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_through_validation() {
        let curve = token_bucket(5, 25);
        let json = serde_json::to_string(&curve).unwrap();
        let back: Curve<Rational64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid_curves() {
        // two segments with decreasing abscissae
        let raw = r#"[
            {"x": {"Finite": [0, 1]}, "y": {"Finite": [0, 1]}, "slope": {"Finite": [1, 1]}, "left_open": false},
            {"x": {"Finite": [-3, 1]}, "y": {"Finite": [0, 1]}, "slope": {"Finite": [1, 1]}, "left_open": false}
        ]"#;
        assert!(serde_json::from_str::<Curve<Rational64>>(raw).is_err());
    }
}
