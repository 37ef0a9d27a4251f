/// Tolerance for comparing scene-unit lengths produced by float arithmetic.
pub(crate) const EPS: f64 = 1e-9;

pub(crate) fn approx_le(a: f64, b: f64) -> bool {
    a <= b + EPS
}

/// Largest value in `values`, or `floor` when empty.
pub(crate) fn max_or(values: impl IntoIterator<Item = f64>, floor: f64) -> f64 {
    values.into_iter().fold(floor, f64::max)
}

pub(crate) fn is_non_negative_finite(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
