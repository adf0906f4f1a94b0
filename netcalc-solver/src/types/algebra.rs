use netcalc_core::models::{Curve, Num, Scalar};

/// Pairwise segment-crossing search.
///
/// Every pair of segments is tested; a candidate crossing is kept when it
/// is strictly positive and lies inside both segments' validity windows
/// (the half-open span from a segment's start to its successor's start, or
/// onward without bound for the last segment). The least surviving
/// abscissa is the answer; curves that never cross yield
/// `PositiveInfinity`.
pub(crate) fn x_intersection<S: Scalar>(f: &Curve<S>, g: &Curve<S>) -> Num<S> {
    let mut result = Num::positive_infinity();
    for (i, sf) in f.segments().iter().enumerate() {
        for (j, sg) in g.segments().iter().enumerate() {
            let crossing = sf.x_intersection_with(sg);
            if crossing.is_nan() || !crossing.gt_zero() {
                continue;
            }
            if !window_contains(f, i, &crossing) || !window_contains(g, j, &crossing) {
                continue;
            }
            if crossing < result {
                result = crossing;
            }
        }
    }
    result
}

fn window_contains<S: Scalar>(curve: &Curve<S>, index: usize, x: &Num<S>) -> bool {
    if x < &curve.segment(index).x {
        return false;
    }
    match curve.segments().get(index + 1) {
        Some(next) => x < &next.x,
        None => true,
    }
}
