use thiserror::Error;

/// Errors that can occur when creating a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    /// Fewer than two grid points were requested.
    #[error("grid needs at least 2 points, got {points}")]
    TooFewPoints { points: usize },

    /// One or both interval bounds are non-finite.
    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    /// The interval end does not lie after its start.
    #[error("interval [{t0}, {t1}] is empty or reversed")]
    EmptyInterval { t0: f64, t1: f64 },

    /// The step size is non-finite or too small to advance time at the
    /// interval bounds.
    #[error("step size {step} cannot advance time across [{t0}, {t1}]")]
    DegenerateStep { t0: f64, t1: f64, step: f64 },
}

/// A uniformly spaced time grid over `[t0, t1]`.
///
/// The grid has `points` values with step `h = (t1 - t0) / (points - 1)`.
/// Construction guarantees `points >= 2`, finite bounds, `t1 > t0`, and a
/// finite step that strictly advances time at both ends of the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid", into = "RawGrid")
)]
pub struct Grid {
    t0: f64,
    t1: f64,
    points: usize,
}

impl Grid {
    /// Creates a validated grid.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `points < 2`, either bound is non-finite,
    /// `t1 <= t0`, or the step size is lost to rounding at either bound.
    pub fn new(t0: f64, t1: f64, points: usize) -> Result<Self, GridError> {
        if points < 2 {
            return Err(GridError::TooFewPoints { points });
        }
        if !t0.is_finite() {
            return Err(GridError::NonFiniteBound { value: t0 });
        }
        if !t1.is_finite() {
            return Err(GridError::NonFiniteBound { value: t1 });
        }
        if t1 <= t0 {
            return Err(GridError::EmptyInterval { t0, t1 });
        }

        let grid = Self { t0, t1, points };
        let step = grid.step_size();
        // Float spacing grows with magnitude, so checking both bounds covers
        // every time accumulated in between.
        if !step.is_finite() || t0 + step <= t0 || t1 - step >= t1 {
            return Err(GridError::DegenerateStep { t0, t1, step });
        }

        Ok(grid)
    }

    /// Returns the start of the interval.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.t0
    }

    /// Returns the end of the interval.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.t1
    }

    /// Returns the number of grid points, including both endpoints.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the number of steps between grid points (`points - 1`).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points - 1
    }

    /// Returns the fixed step size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step_size(&self) -> f64 {
        (self.t1 - self.t0) / self.steps() as f64
    }
}

/// Unvalidated grid fields, used to route deserialization through [`Grid::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    t0: f64,
    t1: f64,
    points: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::new(raw.t0, raw.t1, raw.points)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for RawGrid {
    fn from(grid: Grid) -> Self {
        Self {
            t0: grid.t0,
            t1: grid.t1,
            points: grid.points,
        }
    }
}
