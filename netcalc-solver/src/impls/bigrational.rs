use crate::Backend;
use netcalc_core::models::BigRational;

/// Backend over arbitrary-precision rationals.
///
/// Exact like the default backend, with unbounded numerators and
/// denominators. Values are heap-allocated, so derivations cost more per
/// operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigRationalBackend;

impl Backend for BigRationalBackend {
    type Scalar = BigRational;
}
