use log::Level;
use odestep_core::Observer;

use crate::traits::{HasState, HasStep, HasTime};

/// An observer that logs committed points through the `log` facade.
///
/// By default every point is logged at [`Level::Info`]. Use
/// [`every`](LogObserver::every) to thin the output on long grids.
///
/// # Example
///
/// ```ignore
/// let observer = LogObserver::new().every(100).level(Level::Debug);
/// runge_kutta::solve(&f, &y0, &grid, observer)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    stride: usize,
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs every point at `Info`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stride: 1,
            level: Level::Info,
        }
    }

    /// Logs only steps that are multiples of `stride`.
    ///
    /// A stride of zero is treated as one.
    #[must_use]
    pub fn every(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// Sets the level log records are emitted at.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns true if `step` falls on the logging stride.
    fn logs(&self, step: usize) -> bool {
        step.is_multiple_of(self.stride)
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasStep + HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.logs(event.step()) {
            log::log!(
                self.level,
                "step {}: t = {}, y = {:?}",
                event.step(),
                event.time(),
                event.state()
            );
        }
        None
    }
}
