/// Configuration for the backward Euler solver's Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Newton stops once a correction satisfies `|δ| <= tolerance`.
    pub tolerance: f64,
    /// Maximum Newton iterations per step before the solve is abandoned.
    pub max_iters: usize,
    /// Residual derivatives with `|g'| <= singular_tol` are treated as singular.
    pub singular_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: 10,
            singular_tol: f64::EPSILON,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err("tolerance must be finite and non-negative");
        }
        if !self.singular_tol.is_finite() || self.singular_tol < 0.0 {
            return Err("singular_tol must be finite and non-negative");
        }
        Ok(())
    }
}
