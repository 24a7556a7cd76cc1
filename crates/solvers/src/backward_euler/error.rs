use thiserror::Error;

/// Errors that can occur during backward Euler integration.
///
/// Any error aborts the whole solve; no partial trajectory is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(
        "Newton iteration did not converge in {iters} iterations at step {step} (t = {time}), \
         last correction {last_correction}"
    )]
    NonConvergence {
        step: usize,
        time: f64,
        iters: usize,
        last_correction: f64,
    },

    #[error("singular Jacobian at step {step} (t = {time}, y = {y}): 1 - h*fy = {derivative}")]
    SingularJacobian {
        step: usize,
        time: f64,
        y: f64,
        derivative: f64,
    },

    #[error("non-finite residual {residual} at step {step} (t = {time}, y = {y})")]
    NonFiniteResidual {
        step: usize,
        time: f64,
        y: f64,
        residual: f64,
    },
}
