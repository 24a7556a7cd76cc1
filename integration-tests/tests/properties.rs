//! Properties every solver shares: grid shape, initial condition, observers.

use approx::assert_relative_eq;
use integration_tests::problems::{growth, two_body};
use odestep_core::{Grid, Status};
use odestep_observers::{CsvObserver, LogObserver};
use odestep_solvers::{backward_euler, runge_kutta, trapezoidal};

fn grid() -> Grid {
    Grid::new(0.0, 2.0, 17).expect("valid grid")
}

fn assert_uniform(times: &[f64], grid: &Grid) {
    assert_eq!(times.len(), grid.points());
    for (i, t) in times.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let expected = grid.start() + i as f64 * grid.step_size();
        assert_relative_eq!(*t, expected, epsilon = 1e-12);
    }
}

#[test]
fn backward_euler_keeps_grid_and_initial_condition() {
    let grid = grid();
    let solution = backward_euler::solve_unobserved(
        &|t: f64, y: f64| t - y,
        &|_t: f64, _y: f64| -1.0,
        0.75,
        &grid,
        &backward_euler::Config::default(),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, grid.steps());
    assert_eq!(solution.trajectory.states()[0], 0.75);
    assert_uniform(solution.trajectory.times(), &grid);
}

#[test]
fn explicit_solvers_keep_grid_and_initial_condition() {
    let grid = grid();
    let y0 = [1.0, 0.0, 0.0, 1.0];

    for solution in [
        trapezoidal::solve_unobserved(&two_body(), &y0, &grid).expect("should solve"),
        runge_kutta::solve_unobserved(&two_body(), &y0, &grid).expect("should solve"),
    ] {
        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, grid.steps());
        assert_eq!(solution.trajectory.states()[0], y0.to_vec());
        assert!(solution.trajectory.states().iter().all(|s| s.len() == 4));
        assert_uniform(solution.trajectory.times(), &grid);
    }
}

#[test]
fn explicit_solvers_reject_mismatched_dimensions() {
    let grid = grid();

    assert_eq!(
        trapezoidal::solve_unobserved(&two_body(), &[1.0, 0.0], &grid).unwrap_err(),
        trapezoidal::Error::DimensionMismatch {
            functions: 4,
            states: 2,
        }
    );
    assert_eq!(
        runge_kutta::solve_unobserved(&growth(), &[1.0, 2.0], &grid).unwrap_err(),
        runge_kutta::Error::DimensionMismatch {
            functions: 1,
            states: 2,
        }
    );
}

#[test]
fn minimal_grid_takes_one_step() {
    let grid = Grid::new(0.0, 0.5, 2).expect("valid grid");

    let solution = runge_kutta::solve_unobserved(&growth(), &[1.0], &grid).expect("should solve");

    assert_eq!(solution.steps, 1);
    assert_eq!(solution.trajectory.times(), &[0.0, 0.5]);
}

#[test]
fn shared_observers_work_with_every_solver() {
    let grid = grid();

    let mut scalar = CsvObserver::new(Vec::new());
    backward_euler::solve(
        &|_t: f64, y: f64| -y,
        &|_t: f64, _y: f64| -1.0,
        1.0,
        &grid,
        &backward_euler::Config::default(),
        &mut scalar,
    )
    .expect("should solve");
    assert_eq!(scalar.lines(), grid.points());

    let mut heun = CsvObserver::new(Vec::new());
    trapezoidal::solve(&growth(), &[1.0], &grid, &mut heun).expect("should solve");
    assert_eq!(heun.lines(), grid.points());

    let solution = runge_kutta::solve(&growth(), &[1.0], &grid, LogObserver::new().every(4))
        .expect("should solve");
    assert_eq!(solution.status, Status::Complete);
}

#[test]
fn observer_sees_the_trajectory_being_built() {
    let grid = grid();
    let mut seen = Vec::new();

    let solution = trapezoidal::solve(
        &growth(),
        &[1.0],
        &grid,
        |event: &trapezoidal::Event<'_>| {
            seen.push((event.step, event.time, event.state[0]));
            None
        },
    )
    .expect("should solve");

    assert_eq!(seen.len(), solution.trajectory.len());
    for ((step, t, y), (i, (expected_t, state))) in
        seen.into_iter().zip(solution.trajectory.iter().enumerate())
    {
        assert_eq!(step, i);
        assert_eq!(t, expected_t);
        assert_eq!(y, state[0]);
    }
}
