//! Comma-separated output for plotting tools.
//!
//! Each committed point becomes one line: the time followed by the state
//! components in order, joined by `", "`.
//!
//! ```text
//! 0, 1, 0
//! 0.1, 0.995, -0.0995
//! ```

use std::io::{self, Write};

use log::warn;
use odestep_core::{Observer, Trajectory};

use crate::traits::{CanStopEarly, HasState, HasTime};

/// Writes a scalar trajectory as `t, y` lines.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_scalar<W: Write>(trajectory: &Trajectory<f64>, mut writer: W) -> io::Result<()> {
    for (t, y) in trajectory.iter() {
        write_line(&mut writer, t, std::slice::from_ref(y))?;
    }
    writer.flush()
}

/// Writes a vector trajectory as `t, y1, y2, ...` lines.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_vector<W: Write>(trajectory: &Trajectory<Vec<f64>>, mut writer: W) -> io::Result<()> {
    for (t, y) in trajectory.iter() {
        write_line(&mut writer, t, y)?;
    }
    writer.flush()
}

fn write_line<W: Write>(writer: &mut W, t: f64, state: &[f64]) -> io::Result<()> {
    write!(writer, "{t}")?;
    for y in state {
        write!(writer, ", {y}")?;
    }
    writeln!(writer)
}

/// An observer that streams each committed point to a writer as it is solved.
///
/// The first I/O error stops the solver early; [`finish`](CsvObserver::finish)
/// reports it. Pass `&mut observer` to the solver to keep ownership.
///
/// # Example
///
/// ```ignore
/// let file = std::io::BufWriter::new(std::fs::File::create("orbit.txt")?);
/// let mut csv = CsvObserver::new(file);
/// trapezoidal::solve(&f, &y0, &grid, &mut csv)?;
/// csv.finish()?;
/// ```
#[derive(Debug)]
pub struct CsvObserver<W> {
    writer: W,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: Write> CsvObserver<W> {
    /// Creates an observer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: 0,
            error: None,
        }
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while observing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn record<E, A>(&mut self, event: &E) -> Option<A>
    where
        E: HasTime + HasState,
        A: CanStopEarly,
    {
        if self.error.is_some() {
            return Some(A::stop_early());
        }

        match write_line(&mut self.writer, event.time(), event.state()) {
            Ok(()) => {
                self.lines += 1;
                None
            }
            Err(err) => {
                warn!("stopping solve after write failure: {err}");
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}

impl<E, A, W> Observer<E, A> for CsvObserver<W>
where
    E: HasTime + HasState,
    A: CanStopEarly,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event)
    }
}

impl<E, A, W> Observer<E, A> for &mut CsvObserver<W>
where
    E: HasTime + HasState,
    A: CanStopEarly,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).record(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::{Grid, Status};
    use odestep_solvers::{backward_euler, trapezoidal};

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn scalar_lines_are_time_then_value() {
        let mut trajectory = Trajectory::with_capacity(0.0, 1.0, 2);
        trajectory.push(0.5, 0.25);

        let mut out = Vec::new();
        write_scalar(&trajectory, &mut out).expect("writes to memory");

        assert_eq!(String::from_utf8(out).unwrap(), "0, 1\n0.5, 0.25\n");
    }

    #[test]
    fn vector_components_are_joined_in_order() {
        let mut trajectory = Trajectory::with_capacity(0.0, vec![1.0, -2.0, 3.5], 2);
        trajectory.push(0.1, vec![0.5, 0.0, -1.0]);

        let mut out = Vec::new();
        write_vector(&trajectory, &mut out).expect("writes to memory");

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0, 1, -2, 3.5\n0.1, 0.5, 0, -1\n"
        );
    }

    #[test]
    fn streaming_matches_batch_output() {
        let f = [|_t: f64, y: &[f64]| -y[0]];
        let grid = Grid::new(0.0, 1.0, 5).expect("valid grid");

        let mut csv = CsvObserver::new(Vec::new());
        let solution = trapezoidal::solve(&f, &[2.0], &grid, &mut csv).expect("should solve");
        assert_eq!(csv.lines(), 5);
        let streamed = csv.finish().expect("no write errors");

        let mut batch = Vec::new();
        write_vector(&solution.trajectory, &mut batch).expect("writes to memory");

        assert_eq!(streamed, batch);
    }

    #[test]
    fn scalar_solver_events_stream_one_value_per_line() {
        let grid = Grid::new(0.0, 1.0, 3).expect("valid grid");

        let mut csv = CsvObserver::new(Vec::new());
        backward_euler::solve(
            &|_t: f64, y: f64| -y,
            &|_t: f64, _y: f64| -1.0,
            1.0,
            &grid,
            &backward_euler::Config::default(),
            &mut csv,
        )
        .expect("should solve");

        let text = String::from_utf8(csv.finish().expect("no write errors")).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|line| line.split(", ").count() == 2));
        assert!(text.starts_with("0, 1\n"));
    }

    #[test]
    fn write_failure_stops_the_solve() {
        let f = [|_t: f64, y: &[f64]| -y[0]];
        let grid = Grid::new(0.0, 1.0, 50).expect("valid grid");

        let mut csv = CsvObserver::new(FullDisk);
        let solution = trapezoidal::solve(&f, &[1.0], &grid, &mut csv).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(csv.lines(), 0);
        assert!(csv.finish().is_err());
    }
}
