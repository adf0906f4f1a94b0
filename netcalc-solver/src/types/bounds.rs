use netcalc_core::models::{ArrivalCurve, Num, Scalar, ServiceCurve};
use tracing::trace;

/// Degenerate-pair filter applied before any general derivation runs.
///
/// Zero arrivals are never delayed. A delayed infinite burst clears
/// everything the moment its latency expires, so the latency is the bound;
/// this assumes the arrival curve carries no initial latency of its own,
/// which is the caller's contract and is not checked here. Zero service,
/// or arrivals that outpace the service in the long run, admit no finite
/// bound.
pub(crate) fn special_case<S: Scalar>(
    arrival: &ArrivalCurve<S>,
    service: &ServiceCurve<S>,
) -> Option<Num<S>> {
    if arrival.is_zero() {
        trace!("zero arrivals, bound collapses to zero");
        return Some(Num::zero());
    }
    if service.delayed_infinite_burst() {
        trace!(latency = %service.latency(), "delayed infinite burst, bound is the latency");
        return Some(service.latency().clone());
    }
    if service.is_zero() || arrival.ultimate_rate() > service.ultimate_rate() {
        trace!("service can never catch up, no finite bound exists");
        return Some(Num::positive_infinity());
    }
    None
}

/// Worst-case delay of a single flow served in FIFO order.
///
/// The maximum horizontal deviation between the two graphs is attained at a
/// breakpoint of one of them, so every breakpoint level of both curves is a
/// candidate: the delay at level y is the last instant the service is still
/// clearing y minus the first instant the arrivals produced y.
pub(crate) fn fifo<S: Scalar>(arrival: &ArrivalCurve<S>, service: &ServiceCurve<S>) -> Num<S> {
    if let Some(bound) = special_case(arrival, service) {
        return bound;
    }
    let mut result = Num::negative_infinity();
    for segment in arrival.curve().segments() {
        result = result.max(&delay_at(&segment.y, arrival, service));
    }
    for segment in service.curve().segments() {
        result = result.max(&delay_at(&segment.y, arrival, service));
    }
    trace!(delay = %result, "maximum horizontal deviation across breakpoints");
    // Representation edge cases can push a candidate below zero; the bound
    // itself never is.
    Num::zero().max(&result)
}

fn delay_at<S: Scalar>(
    y: &Num<S>,
    arrival: &ArrivalCurve<S>,
    service: &ServiceCurve<S>,
) -> Num<S> {
    service
        .inverse_evaluate(y, true)
        .sub(&arrival.inverse_evaluate(y, false))
}

/// Worst-case backlog: the maximum vertical deviation between arrivals and
/// service, attained at a breakpoint of one of the curves.
///
/// At an arrival breakpoint the post-jump value counts (the burst is
/// already queued an instant after the jump), while the service is taken at
/// its left limit, keeping the deviation an upper bound on both sides of
/// every discontinuity.
pub(crate) fn backlog<S: Scalar>(arrival: &ArrivalCurve<S>, service: &ServiceCurve<S>) -> Num<S> {
    if arrival.is_zero() {
        return Num::zero();
    }
    if service.delayed_infinite_burst() {
        // Everything admitted during the blackout is the whole backlog.
        return arrival.evaluate(service.latency());
    }
    if service.is_zero() || arrival.ultimate_rate() > service.ultimate_rate() {
        return Num::positive_infinity();
    }
    let mut result = Num::negative_infinity();
    for segment in arrival.curve().segments() {
        result = result.max(&segment.y.sub(&service.evaluate(&segment.x)));
    }
    for segment in service.curve().segments() {
        result = result.max(
            &arrival
                .evaluate(&segment.x)
                .sub(&service.evaluate(&segment.x)),
        );
    }
    trace!(backlog = %result, "maximum vertical deviation across breakpoints");
    Num::zero().max(&result)
}
