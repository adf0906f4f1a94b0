use netcalc_solver::{Backend, Curve, CurveError, LinearSegment, ServiceCurve};
use rstest::*;
use rstest_reuse::{self, *};

mod all_backends;
use all_backends::all_backends;

#[apply(all_backends)]
#[rstest]
fn zero_arrivals_are_never_delayed(backend: impl Backend) {
    let arrival = backend.zero_arrivals();
    let service = backend
        .rate_latency(backend.constant(20), backend.constant(20))
        .unwrap();

    assert!(backend.derive_arb(&arrival, &service).eq_zero());
    assert!(backend.derive_fifo(&arrival, &service).eq_zero());

    // even a server that never serves cannot delay nothing
    let none = backend.zero_service();
    assert!(backend.derive_arb(&arrival, &none).eq_zero());
    assert!(backend.derive_fifo(&arrival, &none).eq_zero());
}

#[apply(all_backends)]
#[rstest]
fn zero_service_has_no_finite_bound(backend: impl Backend) {
    let arrival = backend
        .token_bucket(backend.constant(5), backend.constant(25))
        .unwrap();
    let service = backend.zero_service();

    assert_eq!(
        backend.derive_arb(&arrival, &service),
        backend.positive_infinity()
    );
    assert_eq!(
        backend.derive_fifo(&arrival, &service),
        backend.positive_infinity()
    );
}

#[apply(all_backends)]
#[rstest]
fn overloaded_service_has_no_finite_bound(backend: impl Backend) {
    let arrival = backend
        .token_bucket(backend.constant(25), backend.constant(5))
        .unwrap();
    let service = backend
        .rate_latency(backend.constant(20), backend.constant(2))
        .unwrap();

    assert_eq!(
        backend.derive_arb(&arrival, &service),
        backend.positive_infinity()
    );
    assert_eq!(
        backend.derive_fifo(&arrival, &service),
        backend.positive_infinity()
    );
}

#[apply(all_backends)]
#[rstest]
fn delayed_infinite_burst_bounds_at_its_latency(backend: impl Backend) {
    let arrival = backend
        .token_bucket(backend.constant(5), backend.constant(25))
        .unwrap();
    let service = backend.delayed_infinite_burst(backend.constant(7)).unwrap();

    assert_eq!(backend.derive_arb(&arrival, &service), backend.constant(7));
    assert_eq!(backend.derive_fifo(&arrival, &service), backend.constant(7));
}

#[apply(all_backends)]
#[rstest]
fn token_bucket_against_rate_latency(backend: impl Backend) {
    let arrival = backend
        .token_bucket(backend.constant(5), backend.constant(25))
        .unwrap();
    let service = backend
        .rate_latency(backend.constant(20), backend.constant(20))
        .unwrap();

    // service catches the arrivals where 25 + 5x = 20(x − 20)
    assert_eq!(
        backend.derive_arb(&arrival, &service),
        backend.ratio(85, 3)
    );
    // the burst level dominates: 20 + 25/20 − 0
    assert_eq!(
        backend.derive_fifo(&arrival, &service),
        backend.ratio(85, 4)
    );
}

#[apply(all_backends)]
#[rstest]
fn equal_rates_diverge_by_discipline(backend: impl Backend) {
    let arrival = backend
        .token_bucket(backend.constant(5), backend.constant(25))
        .unwrap();
    let service = backend
        .rate_latency(backend.constant(5), backend.constant(20))
        .unwrap();

    // the gap stays constant forever, so the curves never cross
    assert_eq!(
        backend.derive_arb(&arrival, &service),
        backend.positive_infinity()
    );
    // but each unit of traffic is still cleared a bounded time after it
    // arrives
    assert_eq!(backend.derive_fifo(&arrival, &service), backend.constant(25));
}

#[apply(all_backends)]
#[rstest]
fn unattained_levels_poison_the_fifo_bound(backend: impl Backend) {
    // arrivals saturate at 25 while the service has a breakpoint at level
    // 50; the level is unreachable on the arrival side and the candidate
    // delay there is indeterminate
    let arrival = backend
        .token_bucket(backend.constant(0), backend.constant(25))
        .unwrap();
    let service = ServiceCurve::new(
        Curve::new(vec![
            LinearSegment::closed(backend.constant(0), backend.constant(0), backend.constant(0)),
            LinearSegment::closed(
                backend.constant(10),
                backend.constant(0),
                backend.constant(5),
            ),
            LinearSegment::closed(
                backend.constant(20),
                backend.constant(50),
                backend.constant(20),
            ),
        ])
        .unwrap(),
    );

    assert!(backend.derive_fifo(&arrival, &service).is_nan());
    // the order-agnostic bound only needs the crossing: 25 = 5(x − 10)
    assert_eq!(backend.derive_arb(&arrival, &service), backend.constant(15));
}

#[apply(all_backends)]
#[rstest]
fn factories_reject_malformed_parameters(backend: impl Backend) {
    // a falling final piece would eventually take the curve negative
    assert_eq!(
        backend
            .token_bucket(backend.constant(-5), backend.constant(25))
            .unwrap_err(),
        CurveError::NegativeValue
    );
    assert_eq!(
        backend
            .token_bucket(backend.constant(5), backend.constant(-25))
            .unwrap_err(),
        CurveError::NegativeValue
    );
    assert_eq!(
        backend
            .rate_latency(backend.constant(20), backend.constant(-3))
            .unwrap_err(),
        CurveError::DecreasingAbscissa
    );
}
