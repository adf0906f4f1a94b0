use crate::Backend;
use netcalc_core::models::Rational64;

/// The default backend: exact arithmetic over 64-bit rationals.
///
/// Every bound it derives is exact. Numerators and denominators are capped
/// at 64 bits, so extreme curve parameters can overflow; switch to the
/// arbitrary-precision backend when inputs may compound past that.
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalBackend;

impl Backend for RationalBackend {
    type Scalar = Rational64;
}
