//! Piecewise-affine curve models.
//!
//! This module provides the curve family bound derivation operates on:
//! - [`Curve`]: an ordered sequence of affine pieces with construction-time
//!   validation
//! - [`ArrivalCurve`]: a curve additionally guaranteed non-decreasing,
//!   bounding cumulative traffic from above
//! - [`ServiceCurve`]: a curve carrying a derived latency and burst
//!   classification, bounding offered service from below

mod arrival;
mod pwa;
mod segment;
mod service;

pub use arrival::ArrivalCurve;
pub use pwa::{Curve, CurveDto, CurveError};
pub use segment::LinearSegment;
pub use service::ServiceCurve;
