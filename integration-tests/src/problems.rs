use odestep_core::BoxedComponentFn;

/// `y' = y` as a one-component system; `y(t) = y0 * exp(t)`.
#[must_use]
pub fn growth() -> Vec<BoxedComponentFn<'static>> {
    vec![Box::new(|_t: f64, y: &[f64]| y[0])]
}

/// Planar two-body problem with unit gravitational parameter.
///
/// State is `[x, y, vx, vy]`. Starting from `[1, 0, 0, 1]` the exact orbit is
/// the unit circle with period `2π`.
#[must_use]
pub fn two_body() -> Vec<BoxedComponentFn<'static>> {
    vec![
        Box::new(|_t: f64, s: &[f64]| s[2]),
        Box::new(|_t: f64, s: &[f64]| s[3]),
        Box::new(|_t: f64, s: &[f64]| -s[0] / radius(s).powi(3)),
        Box::new(|_t: f64, s: &[f64]| -s[1] / radius(s).powi(3)),
    ]
}

/// Distance from the origin for a two-body state.
#[must_use]
pub fn radius(state: &[f64]) -> f64 {
    state[0].hypot(state[1])
}
