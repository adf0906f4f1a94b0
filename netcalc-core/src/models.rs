mod num;
mod curve;

pub use curve::{ArrivalCurve, Curve, CurveDto, CurveError, LinearSegment, ServiceCurve};
pub use num::{Num, Scalar};

#[cfg(feature = "bigrational")]
pub use num::BigRational;
#[cfg(feature = "rational")]
pub use num::Rational64;
