//! Explicit trapezoidal (Heun) solver for systems of ODEs.
//!
//! Each step predicts with forward Euler and corrects with the average of the
//! slopes at both ends of the step:
//!
//! ```text
//! d1      = f(t_n, y_n)
//! y_euler = y_n + h * d1
//! d2      = f(t_n + h, y_euler)
//! y_{n+1} = y_n + h * (d1 + d2) / 2
//! ```
//!
//! The method is second-order accurate and fully explicit: beyond the upfront
//! dimension check it cannot fail.

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
    integrate::<Heun, _, _>(f, y0, grid, observer)
}

/// Integrates with the trapezoidal method without observation.
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

/// Stage buffers for one Heun step.
struct Heun {
    d1: Vec<f64>,
    d2: Vec<f64>,
    euler: Vec<f64>,
}

impl Method for Heun {
    const NAME: &'static str = "trapezoidal";

    fn with_dimension(m: usize) -> Self {
        Self {
            d1: vec![0.0; m],
            d2: vec![0.0; m],
            euler: vec![0.0; m],
        }
    }

    fn advance<F: ComponentFn>(&mut self, f: &[F], t: f64, h: f64, y: &[f64], next: &mut [f64]) {
        let Self { d1, d2, euler } = self;

        evaluate_into(f, t, y, d1);
        for ((e, y), d1) in euler.iter_mut().zip(y).zip(d1.iter()) {
            *e = y + h * d1;
        }

        evaluate_into(f, t + h, euler, d2);
        for (((n, y), d1), d2) in next.iter_mut().zip(y).zip(d1.iter()).zip(d2.iter()) {
            *n = y + h * (d1 + d2) / 2.0;
        }
    }
}
