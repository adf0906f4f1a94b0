use crate::Backend;

/// Backend over IEEE double-precision floats.
///
/// Trades exactness for speed. Kernel results that leave the finite double
/// range are re-classified as infinities or the undefined value instead of
/// lingering inside finite numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatBackend;

impl Backend for FloatBackend {
    type Scalar = f64;
}
