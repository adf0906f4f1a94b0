/// Implementation over 64-bit exact rational arithmetic
#[cfg(feature = "rational")]
pub mod rational;

/// Implementation over arbitrary-precision rational arithmetic
#[cfg(feature = "bigrational")]
pub mod bigrational;

/// Implementation over IEEE double-precision arithmetic
#[cfg(feature = "float")]
pub mod float;
