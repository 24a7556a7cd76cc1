use thiserror::Error;

/// Errors that can occur when integrating a system of ODEs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The number of component functions differs from the state dimension.
    ///
    /// Detected before any stepping.
    #[error("dimension mismatch: {functions} functions for a state of dimension {states}")]
    DimensionMismatch { functions: usize, states: usize },
}
