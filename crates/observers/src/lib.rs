//! Reusable observers for odestep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `odestep_solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasStep`], [`HasTime`], [`HasState`], [`CanStopEarly`])
//! - [`csv`]: Comma-separated trajectory output, batch or streamed with
//!   [`CsvObserver`]
//!
//! [`LogObserver`] reports committed points through the `log` facade.
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod csv;
pub mod traits;

mod logging;

pub use csv::CsvObserver;
pub use logging::LogObserver;
