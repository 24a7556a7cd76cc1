//! Shared right-hand sides for cross-crate solver tests.

pub mod problems;
