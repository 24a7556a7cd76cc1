use thiserror::Error;

/// Errors that can occur when rebuilding a [`Trajectory`] from its parts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    /// No initial condition was given.
    #[error("trajectory must hold at least the initial condition")]
    Empty,

    /// The time and state vectors differ in length.
    #[error("trajectory has {times} times but {states} states")]
    LengthMismatch { times: usize, states: usize },
}

/// Time values and states produced by a fixed-step solve.
///
/// `times[i]` is the time at which `states[i]` holds. Both vectors always have
/// the same length, and the first entry is the initial condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTrajectory<S>")
)]
pub struct Trajectory<S> {
    times: Vec<f64>,
    states: Vec<S>,
}

impl<S> Trajectory<S> {
    /// Starts a trajectory at `(t0, initial)` with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(t0: f64, initial: S, capacity: usize) -> Self {
        let mut times = Vec::with_capacity(capacity);
        let mut states = Vec::with_capacity(capacity);
        times.push(t0);
        states.push(initial);
        Self { times, states }
    }

    /// Rebuilds a trajectory from parallel time and state vectors.
    ///
    /// # Errors
    ///
    /// Returns a [`TrajectoryError`] if the vectors are empty or differ in
    /// length.
    pub fn from_parts(times: Vec<f64>, states: Vec<S>) -> Result<Self, TrajectoryError> {
        if times.len() != states.len() {
            return Err(TrajectoryError::LengthMismatch {
                times: times.len(),
                states: states.len(),
            });
        }
        if times.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        Ok(Self { times, states })
    }

    /// Appends a committed step.
    pub fn push(&mut self, t: f64, state: S) {
        self.times.push(t);
        self.states.push(state);
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false: a trajectory holds at least its initial condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the recorded time values.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the recorded states.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Returns the most recent time and state.
    #[must_use]
    pub fn last(&self) -> (f64, &S) {
        let i = self.times.len() - 1;
        (self.times[i], &self.states[i])
    }

    /// Iterates over `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times.iter().copied().zip(&self.states)
    }

    /// Splits the trajectory into its time and state vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>) {
        (self.times, self.states)
    }
}

/// Unchecked trajectory fields, used to route deserialization through
/// [`Trajectory::from_parts`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTrajectory<S> {
    times: Vec<f64>,
    states: Vec<S>,
}

#[cfg(feature = "serde")]
impl<S> TryFrom<RawTrajectory<S>> for Trajectory<S> {
    type Error = TrajectoryError;

    fn try_from(raw: RawTrajectory<S>) -> Result<Self, Self::Error> {
        Trajectory::from_parts(raw.times, raw.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn starts_at_initial_condition() {
        let trajectory = Trajectory::with_capacity(0.5, 3.0, 4);

        assert_eq!(trajectory.len(), 1);
        assert!(!trajectory.is_empty());
        assert_relative_eq!(trajectory.times()[0], 0.5);
        assert_relative_eq!(trajectory.states()[0], 3.0);
    }

    #[test]
    fn push_keeps_times_and_states_parallel() {
        let mut trajectory = Trajectory::with_capacity(0.0, vec![1.0, 2.0], 3);
        trajectory.push(0.1, vec![1.5, 2.5]);
        trajectory.push(0.2, vec![2.0, 3.0]);

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.times().len(), trajectory.states().len());

        let (t, state) = trajectory.last();
        assert_relative_eq!(t, 0.2);
        assert_eq!(state, &vec![2.0, 3.0]);

        let times: Vec<f64> = trajectory.iter().map(|(t, _)| t).collect();
        assert_eq!(times, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn parts_round_trip() {
        let mut trajectory = Trajectory::with_capacity(0.0, 1.0, 2);
        trajectory.push(0.5, 0.25);

        let (times, states) = trajectory.clone().into_parts();
        assert_eq!(times, vec![0.0, 0.5]);
        assert_eq!(states, vec![1.0, 0.25]);

        let rebuilt = Trajectory::from_parts(times, states).expect("consistent parts");
        assert_eq!(rebuilt, trajectory);
    }

    #[test]
    fn from_parts_rejects_missing_initial_condition() {
        let result = Trajectory::<f64>::from_parts(vec![], vec![]);
        assert_eq!(result, Err(TrajectoryError::Empty));
    }

    #[test]
    fn from_parts_rejects_mismatched_lengths() {
        let result = Trajectory::from_parts(vec![], vec![1.0]);
        assert_eq!(
            result,
            Err(TrajectoryError::LengthMismatch {
                times: 0,
                states: 1,
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_checks_parts() {
        let malformed = serde_json::from_str::<Trajectory<f64>>(r#"{"times":[],"states":[1.0]}"#);
        assert!(malformed.is_err());

        let empty = serde_json::from_str::<Trajectory<f64>>(r#"{"times":[],"states":[]}"#);
        assert!(empty.is_err());

        let trajectory: Trajectory<f64> =
            serde_json::from_str(r#"{"times":[0.0,0.5],"states":[1.0,0.25]}"#)
                .expect("valid trajectory");
        assert_eq!(trajectory.last(), (0.5, &0.25));
    }
}
