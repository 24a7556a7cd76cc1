//! Shared driver for the explicit solvers of coupled systems.
//!
//! [`trapezoidal`](crate::trapezoidal) and [`runge_kutta`](crate::runge_kutta)
//! differ only in how one step is advanced; the dimension check, trajectory
//! bookkeeping, and observer protocol live here.

mod error;
mod event;

pub use error::Error;
pub use event::Event;

use log::{debug, warn};
use odestep_core::{Action, ComponentFn, Grid, Observer, Solution, Status, Trajectory};

/// A single-step explicit method over a system of `m` equations.
pub(crate) trait Method {
    /// Name used in log messages.
    const NAME: &'static str;

    /// Allocates the method's stage buffers for a system of dimension `m`.
    fn with_dimension(m: usize) -> Self;

    /// Advances `y` at time `t` by one step of size `h`, writing into `next`.
    ///
    /// `y` and `next` both have the method's dimension and never alias.
    fn advance<F: ComponentFn>(&mut self, f: &[F], t: f64, h: f64, y: &[f64], next: &mut [f64]);
}

/// Steps `y0` across `grid` with method `M`.
pub(crate) fn integrate<M, F, Obs>(
    f: &[F],
    y0: &[f64],
    grid: &Grid,
    mut observer: Obs,
) -> Result<Solution<Vec<f64>>, Error>
where
    M: Method,
    F: ComponentFn,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if f.len() != y0.len() {
        let err = Error::DimensionMismatch {
            functions: f.len(),
            states: y0.len(),
        };
        warn!("{} rejected system: {err}", M::NAME);
        return Err(err);
    }

    let mut method = M::with_dimension(y0.len());
    let h = grid.step_size();
    let mut t = grid.start();
    let mut trajectory = Trajectory::with_capacity(t, y0.to_vec(), grid.points());

    let event = Event {
        step: 0,
        time: t,
        state: y0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(Status::StoppedByObserver, trajectory));
    }

    for step in 1..=grid.steps() {
        let mut next = vec![0.0; y0.len()];
        let (_, y) = trajectory.last();
        method.advance(f, t, h, y, &mut next);

        t += h;
        trajectory.push(t, next);

        let (_, state) = trajectory.last();
        let event = Event {
            step,
            time: t,
            state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("{} stopped by observer at step {step}", M::NAME);
            return Ok(Solution::new(Status::StoppedByObserver, trajectory));
        }
    }

    debug!("{} completed {} steps", M::NAME, grid.steps());
    Ok(Solution::new(Status::Complete, trajectory))
}
