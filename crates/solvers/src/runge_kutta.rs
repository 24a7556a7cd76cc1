//! Classical fourth-order Runge–Kutta solver for systems of ODEs.
//!
//! ```text
//! k1 = h * f(t_n,         y_n)
//! k2 = h * f(t_n + h / 2, y_n + k1 / 2)
//! k3 = h * f(t_n + h / 2, y_n + k2 / 2)
//! k4 = h * f(t_n + h,     y_n + k3)
//!
//! y_{n+1} = y_n + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! Every stage is evaluated from the unmodified `y_n` and kept in its own
//! buffer until the final combination.

pub use crate::system::{Error, Event};

use odestep_core::{Action, ComponentFn, Grid, Observer, Solution, evaluate_into};

use crate::system::{Method, integrate};

/// Integrates the system `y_j' = f[j](t, y)` from `y0` across `grid`.
///
/// `f` holds one component function per state entry.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial condition and after
/// each committed step, and may return [`Action::StopEarly`] to end the solve
/// with the trajectory so far.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `f.len() != y0.len()`.
pub fn solve<F, Obs>(
    f: &[F],
    y0: &[f64],
    grid: &Grid,
    observer: Obs,
) -> Result<Solution<Vec<f64>>, Error>
where
    F: ComponentFn,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    integrate::<Rk4, _, _>(f, y0, grid, observer)
}

/// Integrates with Runge–Kutta without observation.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `f.len() != y0.len()`.
pub fn solve_unobserved<F: ComponentFn>(
    f: &[F],
    y0: &[f64],
    grid: &Grid,
) -> Result<Solution<Vec<f64>>, Error> {
    solve(f, y0, grid, ())
}

/// Stage buffers for one Runge–Kutta step.
struct Rk4 {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    /// Stage input `y_n + c * k`, rebuilt before each evaluation.
    probe: Vec<f64>,
}

impl Rk4 {
    /// Evaluates `h * f(t, probe)` into `k`.
    fn stage<F: ComponentFn>(f: &[F], t: f64, h: f64, probe: &[f64], k: &mut [f64]) {
        evaluate_into(f, t, probe, k);
        for k in k.iter_mut() {
            *k *= h;
        }
    }

    /// Sets `probe = y + scale * k`.
    fn offset(probe: &mut [f64], y: &[f64], k: &[f64], scale: f64) {
        for ((p, y), k) in probe.iter_mut().zip(y).zip(k) {
            *p = y + scale * k;
        }
    }
}

impl Method for Rk4 {
    const NAME: &'static str = "Runge-Kutta";

    fn with_dimension(m: usize) -> Self {
        Self {
            k1: vec![0.0; m],
            k2: vec![0.0; m],
            k3: vec![0.0; m],
            k4: vec![0.0; m],
            probe: vec![0.0; m],
        }
    }

    fn advance<F: ComponentFn>(&mut self, f: &[F], t: f64, h: f64, y: &[f64], next: &mut [f64]) {
        let Self {
            k1,
            k2,
            k3,
            k4,
            probe,
        } = self;
        let t_mid = t + h / 2.0;

        Self::stage(f, t, h, y, k1);

        Self::offset(probe, y, k1, 0.5);
        Self::stage(f, t_mid, h, probe, k2);

        Self::offset(probe, y, k2, 0.5);
        Self::stage(f, t_mid, h, probe, k3);

        Self::offset(probe, y, k3, 1.0);
        Self::stage(f, t + h, h, probe, k4);

        for (j, n) in next.iter_mut().enumerate() {
            *n = y[j] + (k1[j] + 2.0 * k2[j] + 2.0 * k3[j] + k4[j]) / 6.0;
        }
    }
}
