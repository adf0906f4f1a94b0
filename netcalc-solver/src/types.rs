use netcalc_core::models::{ArrivalCurve, Curve, CurveError, Num, Scalar, ServiceCurve};

mod algebra;
mod bounds;
mod factories;

/// The Backend trait binds one implementation set together: the numeric
/// domain finite magnitudes live in, the curve factories, the curve
/// algebra, and the bound derivations built on top of them.
///
/// A backend is chosen once, before any curve or number is created, and
/// passed by reference to every construction and derivation call for the
/// life of the process. Every value a backend produces is
/// type-parameterized by its scalar, so mixing values from different
/// backends is rejected by the compiler, and multiple backends can coexist
/// (for instance in tests) without any shared state.
///
/// Every method has a default implementation over the piecewise-affine
/// curve model; an implementation only has to pick its scalar.
/// Implementations may override the algebra or derivations wholesale, e.g.
/// to trade exactness for speed.
pub trait Backend {
    /// The magnitude type for finite numbers produced by this backend.
    type Scalar: Scalar;

    /// Exact zero.
    fn zero(&self) -> Num<Self::Scalar> {
        Num::zero()
    }

    /// The upper saturation point of the numeric domain.
    fn positive_infinity(&self) -> Num<Self::Scalar> {
        Num::positive_infinity()
    }

    /// The lower saturation point of the numeric domain.
    fn negative_infinity(&self) -> Num<Self::Scalar> {
        Num::negative_infinity()
    }

    /// The whole number `value`.
    fn constant(&self, value: i64) -> Num<Self::Scalar> {
        Num::from_integer(value)
    }

    /// The ratio `numerator / denominator`.
    fn ratio(&self, numerator: i64, denominator: i64) -> Num<Self::Scalar> {
        Num::from_ratio(numerator, denominator)
    }

    /// The canonical zero-arrivals curve.
    fn zero_arrivals(&self) -> ArrivalCurve<Self::Scalar> {
        ArrivalCurve::zero()
    }

    /// The canonical zero-service curve.
    fn zero_service(&self) -> ServiceCurve<Self::Scalar> {
        ServiceCurve::zero()
    }

    /// A token-bucket arrival curve: an instantaneous burst followed by a
    /// sustained rate.
    fn token_bucket(
        &self,
        rate: Num<Self::Scalar>,
        burst: Num<Self::Scalar>,
    ) -> Result<ArrivalCurve<Self::Scalar>, CurveError> {
        factories::token_bucket(rate, burst)
    }

    /// A rate-latency service curve: nothing until `latency`, then a
    /// sustained rate.
    fn rate_latency(
        &self,
        rate: Num<Self::Scalar>,
        latency: Num<Self::Scalar>,
    ) -> Result<ServiceCurve<Self::Scalar>, CurveError> {
        factories::rate_latency(rate, latency)
    }

    /// A service curve that offers nothing until `latency`, then unbounded
    /// instantaneous capacity.
    fn delayed_infinite_burst(
        &self,
        latency: Num<Self::Scalar>,
    ) -> Result<ServiceCurve<Self::Scalar>, CurveError> {
        factories::delayed_infinite_burst(latency)
    }

    /// The least strictly-positive abscissa at which `f` and `g` cross.
    ///
    /// `PositiveInfinity` when the curves never cross, for instance when
    /// one ultimate rate stays below the other. That is a meaningful
    /// answer, not an error.
    fn x_intersection(
        &self,
        f: &Curve<Self::Scalar>,
        g: &Curve<Self::Scalar>,
    ) -> Num<Self::Scalar> {
        algebra::x_intersection(f, g)
    }

    /// The worst-case delay bound under arbitrary multiplexing: the least
    /// abscissa past which cumulative service has caught up with cumulative
    /// arrivals.
    fn derive_arb(
        &self,
        arrival: &ArrivalCurve<Self::Scalar>,
        service: &ServiceCurve<Self::Scalar>,
    ) -> Num<Self::Scalar> {
        match bounds::special_case(arrival, service) {
            Some(bound) => bound,
            None => self.x_intersection(arrival.curve(), service.curve()),
        }
    }

    /// The worst-case delay bound when the flow is served in FIFO order.
    fn derive_fifo(
        &self,
        arrival: &ArrivalCurve<Self::Scalar>,
        service: &ServiceCurve<Self::Scalar>,
    ) -> Num<Self::Scalar> {
        bounds::fifo(arrival, service)
    }

    /// The worst-case backlog bound: the maximum vertical deviation between
    /// arrivals and service.
    fn derive_backlog(
        &self,
        arrival: &ArrivalCurve<Self::Scalar>,
        service: &ServiceCurve<Self::Scalar>,
    ) -> Num<Self::Scalar> {
        bounds::backlog(arrival, service)
    }
}
