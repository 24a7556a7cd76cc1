//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with every solver in `odestep_solvers`.
//!
//! # Event traits
//!
//! - [`HasStep`]: events that carry a step number
//! - [`HasTime`]: events that carry the time of a committed point
//! - [`HasState`]: events that carry the committed state
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once any state component leaves `[-limit, limit]`.
//! struct Bounded {
//!     limit: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Bounded {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let escaped = event.state().iter().any(|y| y.abs() > self.limit);
//!         escaped.then(A::stop_early)
//!     }
//! }
//! ```

use odestep_core::Action;
use odestep_solvers::{backward_euler, runge_kutta};

/// An event that carries a step number (0 for the initial condition).
pub trait HasStep {
    /// Returns the step number for this event.
    fn step(&self) -> usize;
}

/// An event that carries the time of a committed point.
pub trait HasTime {
    /// Returns the time for this event.
    fn time(&self) -> f64;
}

/// An event that carries the committed state.
pub trait HasState {
    /// Returns the state components in order.
    ///
    /// Scalar solvers return a single-element slice.
    fn state(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- backward_euler::Event ---

impl HasStep for backward_euler::Event {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasTime for backward_euler::Event {
    fn time(&self) -> f64 {
        self.time
    }
}

impl HasState for backward_euler::Event {
    fn state(&self) -> &[f64] {
        std::slice::from_ref(&self.y)
    }
}

// --- Event shared by trapezoidal and runge_kutta ---

impl HasStep for runge_kutta::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasTime for runge_kutta::Event<'_> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl HasState for runge_kutta::Event<'_> {
    fn state(&self) -> &[f64] {
        self.state
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
