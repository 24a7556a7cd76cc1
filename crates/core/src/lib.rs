//! Core types for fixed-step ODE integration.
//!
//! This crate defines the shared pieces that solvers and observers build on:
//!
//! - [`Grid`]: a validated, uniformly spaced time grid over `[t0, t1]`
//! - [`Trajectory`]: the time values and states produced by a solve
//! - [`Solution`]: a trajectory plus how the solver terminated
//! - [`ScalarFn`], [`ComponentFn`]: right-hand side callbacks
//! - [`Observer`]: receives solver events and optionally returns an [`Action`]

mod action;
mod functions;
mod grid;
mod observer;
mod solution;
mod trajectory;

pub use action::Action;
pub use functions::{BoxedComponentFn, ComponentFn, ScalarFn, evaluate_into};
pub use grid::{Grid, GridError};
pub use observer::Observer;
pub use solution::{Solution, Status};
pub use trajectory::{Trajectory, TrajectoryError};
