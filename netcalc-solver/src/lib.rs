/**
 * These are the selectable backend implementations bound derivation runs on.
 */
mod impls;
pub use impls::*;

/**
 * These are the backend contract and the algorithms hanging off it.
 */
mod types;
pub use types::*;

// Re-export the model types so callers (and tests) can name everything the
// backend methods produce without a separate dependency on the core crate.
pub use netcalc_core::models::{
    ArrivalCurve, Curve, CurveError, LinearSegment, Num, Scalar, ServiceCurve,
};
