/// A scalar right-hand side `(t, y) -> f64`.
///
/// Used for the derivative `f(t, y)` of a scalar ODE and for its partial
/// derivative `∂f/∂y`. Any `Fn(f64, f64) -> f64` implements this trait.
pub trait ScalarFn {
    /// Evaluates the function at time `t` and state `y`.
    fn eval(&self, t: f64, y: f64) -> f64;
}

impl<F> ScalarFn for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, t: f64, y: f64) -> f64 {
        self(t, y)
    }
}

/// One component `f_j(t, y)` of a system of ODEs.
///
/// Each component sees the full state vector and returns the time derivative
/// of a single state entry. A system of `m` equations is an ordered slice of
/// `m` components. Any `Fn(f64, &[f64]) -> f64` implements this trait.
pub trait ComponentFn {
    /// Evaluates the component at time `t` and state `y`.
    fn eval(&self, t: f64, y: &[f64]) -> f64;
}

impl<F> ComponentFn for F
where
    F: Fn(f64, &[f64]) -> f64,
{
    fn eval(&self, t: f64, y: &[f64]) -> f64 {
        self(t, y)
    }
}

/// A boxed component, for systems whose components are distinct closures.
pub type BoxedComponentFn<'a> = Box<dyn Fn(f64, &[f64]) -> f64 + 'a>;

/// Evaluates every component at `(t, y)` and writes the results into `out`.
///
/// `out` must have the same length as `functions`.
pub fn evaluate_into<F: ComponentFn>(functions: &[F], t: f64, y: &[f64], out: &mut [f64]) {
    debug_assert_eq!(functions.len(), out.len());
    for (slot, f) in out.iter_mut().zip(functions) {
        *slot = f.eval(t, y);
    }
}
