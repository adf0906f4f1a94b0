use super::pwa::{Curve, CurveDto, CurveError};
use super::segment::LinearSegment;
use crate::models::{Num, Scalar};

/// A service curve: a lower bound on the cumulative service a resource
/// offers over an elapsed time.
///
/// Two markers are derived once, at construction: the `latency` (the
/// x-offset before service becomes positive) and whether the curve is a
/// delayed infinite burst, i.e. zero until its latency and then instantly
/// unbounded, modeling a server that can clear any backlog the moment its
/// initial delay expires. Equality to the canonical zero-service curve is a
/// cheaply testable state.
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
pub struct ServiceCurve<S> {
    curve: Curve<S>,
    latency: Num<S>,
    delayed_infinite_burst: bool,
}

impl<S: Scalar> ServiceCurve<S> {
    /// Wraps a curve, deriving its latency and burst classification.
    pub fn new(curve: Curve<S>) -> Self {
        let latency = Self::derive_latency(&curve);
        let delayed_infinite_burst = Self::classify_burst(&curve);
        Self {
            curve,
            latency,
            delayed_infinite_burst,
        }
    }

    fn derive_latency(curve: &Curve<S>) -> Num<S> {
        if curve.evaluate(&Num::zero()).gt_zero() {
            return Num::zero();
        }
        // The last abscissa at which the curve still offers nothing;
        // identically-zero curves never start serving.
        curve.inverse_evaluate(&Num::zero(), true)
    }

    fn classify_burst(curve: &Curve<S>) -> bool {
        match curve.segments().split_last() {
            Some((last, rest)) => {
                matches!(last.y, Num::PositiveInfinity)
                    && last.slope.eq_zero()
                    && rest
                        .iter()
                        .all(|segment| segment.y.eq_zero() && segment.slope.eq_zero())
            }
            None => false,
        }
    }

    /// The canonical zero-service curve.
    pub fn zero() -> Self {
        let segments = vec![LinearSegment::closed(Num::zero(), Num::zero(), Num::zero())];
        // A single flat segment at the origin satisfies every invariant.
        let curve = unsafe { Curve::new_unchecked(segments) };
        Self::new(curve)
    }

    /// Whether this is the canonical zero-service curve.
    pub fn is_zero(&self) -> bool {
        self.curve.is_zero()
    }

    /// The x-offset before service becomes positive.
    ///
    /// `PositiveInfinity` for the zero-service curve.
    pub fn latency(&self) -> &Num<S> {
        &self.latency
    }

    /// Whether the curve is zero until its latency, then instantly
    /// unbounded.
    pub fn delayed_infinite_burst(&self) -> bool {
        self.delayed_infinite_burst
    }

    /// The underlying piecewise-affine curve.
    pub fn curve(&self) -> &Curve<S> {
        &self.curve
    }

    /// The cumulative service guaranteed up to `x`.
    pub fn evaluate(&self, x: &Num<S>) -> Num<S> {
        self.curve.evaluate(x)
    }

    /// See [`Curve::inverse_evaluate`].
    pub fn inverse_evaluate(&self, y: &Num<S>, right_continuous: bool) -> Num<S> {
        self.curve.inverse_evaluate(y, right_continuous)
    }

    /// The long-run service rate.
    pub fn ultimate_rate(&self) -> &Num<S> {
        self.curve.ultimate_rate()
    }
}

impl<S: Scalar> TryFrom<CurveDto<S>> for ServiceCurve<S> {
    type Error = CurveError;

    fn try_from(value: CurveDto<S>) -> Result<Self, Self::Error> {
        Ok(Self::new(Curve::try_from(value)?))
    }
}

impl<S: Scalar> Into<CurveDto<S>> for ServiceCurve<S> {
    fn into(self) -> CurveDto<S> {
        self.curve.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rational64;

    type N = Num<Rational64>;

    fn n(value: i64) -> N {
        Num::from_integer(value)
    }

    fn rate_latency(rate: i64, latency: i64) -> ServiceCurve<Rational64> {
        ServiceCurve::new(
            Curve::new(vec![
                LinearSegment::closed(n(0), n(0), n(0)),
                LinearSegment::closed(n(latency), n(0), n(rate)),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn latency_is_where_service_starts() {
        assert_eq!(rate_latency(20, 20).latency(), &n(20));

        let immediate = ServiceCurve::new(
            Curve::new(vec![LinearSegment::closed(n(0), n(0), n(7))]).unwrap(),
        );
        assert_eq!(immediate.latency(), &n(0));

        let preloaded = ServiceCurve::new(
            Curve::new(vec![LinearSegment::closed(n(0), n(3), n(1))]).unwrap(),
        );
        assert_eq!(preloaded.latency(), &n(0));
    }

    #[test]
    fn the_zero_curve_never_starts_serving() {
        let zero = ServiceCurve::<Rational64>::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.latency(), &N::positive_infinity());
        assert!(!zero.delayed_infinite_burst());
    }

    #[test]
    fn delayed_infinite_burst_is_detected_structurally() {
        let burst = ServiceCurve::new(
            Curve::new(vec![
                LinearSegment::closed(n(0), n(0), n(0)),
                LinearSegment::open(n(4), N::positive_infinity(), n(0)),
            ])
            .unwrap(),
        );
        assert!(burst.delayed_infinite_burst());
        assert_eq!(burst.latency(), &n(4));

        // a plain rate-latency curve is not a burst
        assert!(!rate_latency(20, 20).delayed_infinite_burst());

        // neither is a curve that serves something before saturating
        let ramp_then_burst = ServiceCurve::new(
            Curve::new(vec![
                LinearSegment::closed(n(0), n(0), n(1)),
                LinearSegment::open(n(4), N::positive_infinity(), n(0)),
            ])
            .unwrap(),
        );
        assert!(!ramp_then_burst.delayed_infinite_burst());
    }
}
