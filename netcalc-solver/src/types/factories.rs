use netcalc_core::models::{ArrivalCurve, Curve, CurveError, LinearSegment, Num, Scalar, ServiceCurve};

/// Token bucket: zero at the origin, then a burst-sized jump growing at the
/// sustained rate. Negative parameters are rejected by curve validation.
pub(crate) fn token_bucket<S: Scalar>(
    rate: Num<S>,
    burst: Num<S>,
) -> Result<ArrivalCurve<S>, CurveError> {
    let segments = vec![
        LinearSegment::closed(Num::zero(), Num::zero(), Num::zero()),
        LinearSegment::open(Num::zero(), burst, rate),
    ];
    ArrivalCurve::new(Curve::new(segments)?)
}

/// Rate latency: flat at zero through the latency, then a sustained rate.
/// A zero latency collapses to a single rising segment.
pub(crate) fn rate_latency<S: Scalar>(
    rate: Num<S>,
    latency: Num<S>,
) -> Result<ServiceCurve<S>, CurveError> {
    let segments = if latency.eq_zero() {
        vec![LinearSegment::closed(Num::zero(), Num::zero(), rate)]
    } else {
        vec![
            LinearSegment::closed(Num::zero(), Num::zero(), Num::zero()),
            LinearSegment::closed(latency, Num::zero(), rate),
        ]
    };
    Ok(ServiceCurve::new(Curve::new(segments)?))
}

/// Delayed infinite burst: zero through the latency, then a jump to `+∞`.
pub(crate) fn delayed_infinite_burst<S: Scalar>(
    latency: Num<S>,
) -> Result<ServiceCurve<S>, CurveError> {
    let segments = vec![
        LinearSegment::closed(Num::zero(), Num::zero(), Num::zero()),
        LinearSegment::open(latency, Num::positive_infinity(), Num::zero()),
    ];
    Ok(ServiceCurve::new(Curve::new(segments)?))
}
