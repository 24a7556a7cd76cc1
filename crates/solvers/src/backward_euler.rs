//! Backward Euler solver for scalar ODEs.
//!
//! Each step solves the implicit equation
//!
//! ```text
//! g(y) = y - h * f(t_{n+1}, y) - y_n = 0
//! ```
//!
//! for `y_{n+1}` with Newton's method, seeded with `y_n` and using the
//! caller's partial derivative `fy = ∂f/∂y`:
//!
//! ```text
//! g'(y) = 1 - h * fy(t_{n+1}, y)
//! y    <- y - g(y) / g'(y)
//! ```
//!
//! The implicit update keeps stiff problems stable at step sizes where
//! explicit methods blow up.
//!
//! # Example
//!
//! ```
//! use odestep_core::Grid;
//! use odestep_solvers::backward_euler::{self, Config};
//!
//! let grid = Grid::new(0.0, 1.0, 11)?;
//! let solution = backward_euler::solve_unobserved(
//!     &|_t: f64, y: f64| -10.0 * y,
//!     &|_t: f64, _y: f64| -10.0,
//!     1.0,
//!     &grid,
//!     &Config::default(),
//! )?;
//!
//! assert_eq!(solution.trajectory.len(), 11);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod event;

pub use config::Config;
pub use error::Error;
pub use event::Event;

use log::{debug, warn};
use odestep_core::{Action, Grid, Observer, ScalarFn, Solution, Status, Trajectory};

/// Integrates `y' = f(t, y)`, `y(t0) = y0` across `grid` with backward Euler.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial condition and after
/// each committed step, and may return [`Action::StopEarly`] to end the solve
/// with the trajectory so far.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if Newton's method fails at
/// any step: it runs out of iterations, hits a singular residual derivative,
/// or produces a non-finite residual. The whole solve is abandoned in each
/// case.
pub fn solve<F, J, Obs>(
    f: &F,
    fy: &J,
    y0: f64,
    grid: &Grid,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: ScalarFn,
    J: ScalarFn,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let h = grid.step_size();
    let mut t = grid.start();
    let mut y = y0;
    let mut trajectory = Trajectory::with_capacity(t, y, grid.points());

    let event = Event {
        step: 0,
        time: t,
        y,
        newton_iters: 0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(Status::StoppedByObserver, trajectory));
    }

    for step in 1..=grid.steps() {
        let t_next = t + h;
        let newton = Newton {
            f,
            fy,
            h,
            t_next,
            y_prev: y,
        };
        let (y_next, newton_iters) = newton
            .solve(step, config)
            .inspect_err(|err| warn!("backward Euler aborted: {err}"))?;
        debug!("backward Euler step {step}: Newton converged in {newton_iters} iterations");

        t = t_next;
        y = y_next;
        trajectory.push(t, y);

        let event = Event {
            step,
            time: t,
            y,
            newton_iters,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, trajectory));
        }
    }

    Ok(Solution::new(Status::Complete, trajectory))
}

/// Integrates with backward Euler without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F, J>(
    f: &F,
    fy: &J,
    y0: f64,
    grid: &Grid,
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    F: ScalarFn,
    J: ScalarFn,
{
    solve(f, fy, y0, grid, config, ())
}

/// The implicit equation for a single backward Euler step.
struct Newton<'a, F, J> {
    f: &'a F,
    fy: &'a J,
    h: f64,
    t_next: f64,
    y_prev: f64,
}

impl<F: ScalarFn, J: ScalarFn> Newton<'_, F, J> {
    /// Residual `g(y) = y - h * f(t_next, y) - y_prev`.
    fn residual(&self, y: f64) -> f64 {
        y - self.h * self.f.eval(self.t_next, y) - self.y_prev
    }

    /// Residual derivative `g'(y) = 1 - h * fy(t_next, y)`.
    fn derivative(&self, y: f64) -> f64 {
        1.0 - self.h * self.fy.eval(self.t_next, y)
    }

    /// Runs Newton's method from `y_prev`, returning the root and the
    /// number of iterations used.
    fn solve(&self, step: usize, config: &Config) -> Result<(f64, usize), Error> {
        let mut y = self.y_prev;
        let mut last_correction = f64::INFINITY;

        for iter in 1..=config.max_iters {
            let residual = self.residual(y);
            if !residual.is_finite() {
                return Err(Error::NonFiniteResidual {
                    step,
                    time: self.t_next,
                    y,
                    residual,
                });
            }

            let derivative = self.derivative(y);
            if !derivative.is_finite() || derivative.abs() <= config.singular_tol {
                return Err(Error::SingularJacobian {
                    step,
                    time: self.t_next,
                    y,
                    derivative,
                });
            }

            let correction = -residual / derivative;
            y += correction;

            if correction.abs() <= config.tolerance {
                return Ok((y, iter));
            }
            last_correction = correction;
        }

        Err(Error::NonConvergence {
            step,
            time: self.t_next,
            iters: config.max_iters,
            last_correction,
        })
    }
}
