//! Fixed-step solvers for initial-value problems `y' = f(t, y)`.
//!
//! # Solvers
//!
//! - [`backward_euler`]: implicit, scalar, with an inner Newton iteration
//! - [`trapezoidal`]: explicit trapezoidal (Heun) predictor-corrector for systems
//! - [`runge_kutta`]: classical four-stage Runge–Kutta for systems
//!
//! Every solver steps across a [`Grid`] and returns a [`Solution`] whose
//! trajectory starts at the initial condition. Each has a `solve` function
//! that accepts an [`Observer`] and a `solve_unobserved` convenience wrapper.
//!
//! [`Grid`]: odestep_core::Grid
//! [`Solution`]: odestep_core::Solution
//! [`Observer`]: odestep_core::Observer

mod system;

pub mod backward_euler;
pub mod runge_kutta;
pub mod trapezoidal;
