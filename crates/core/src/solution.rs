use crate::Trajectory;

/// Indicates how a solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Completed every step of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step solve.
///
/// When deserialized, `steps` is recomputed from the trajectory.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawSolution<S>")
)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Time values and states, starting with the initial condition.
    pub trajectory: Trajectory<S>,

    /// Number of steps committed after the initial condition.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Builds a solution from a trajectory, counting its committed steps.
    #[must_use]
    pub fn new(status: Status, trajectory: Trajectory<S>) -> Self {
        let steps = trajectory.len() - 1;
        Self {
            status,
            trajectory,
            steps,
        }
    }

    /// Returns true if every grid step was taken.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSolution<S> {
    status: Status,
    trajectory: Trajectory<S>,
}

#[cfg(feature = "serde")]
impl<S> From<RawSolution<S>> for Solution<S> {
    fn from(raw: RawSolution<S>) -> Self {
        Solution::new(raw.status, raw.trajectory)
    }
}
