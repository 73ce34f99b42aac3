use super::{
    constants::{CONVERGENCE_TOLERANCE, MAX_ITERATIONS, TAU},
    error::RatingError
};
use serde::{Deserialize, Serialize};

/// Parameters of the Glicko-2 system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glicko2Config {
    /// System constant bounding how far volatility moves in one rating period.
    /// Reasonable values lie between 0.3 and 1.2.
    pub tau: f64,
    /// The root finder stops once its bracket is narrower than this
    pub convergence_tolerance: f64,
    /// Upper bound on root finder iterations (and on the downward bracket search)
    pub max_iterations: usize
}

impl Glicko2Config {
    pub fn with_tau(tau: f64) -> Self {
        Self {
            tau,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RatingError> {
        if !(self.tau.is_finite() && self.tau > 0.0) {
            return Err(RatingError::InvalidConfig(format!("tau must be positive, got {}", self.tau)));
        }

        if !(self.convergence_tolerance.is_finite() && self.convergence_tolerance > 0.0) {
            return Err(RatingError::InvalidConfig(format!(
                "convergence tolerance must be positive, got {}",
                self.convergence_tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(RatingError::InvalidConfig("max iterations must be at least 1".to_string()));
        }

        Ok(())
    }
}

impl Default for Glicko2Config {
    fn default() -> Self {
        Self {
            tau: TAU,
            convergence_tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS
        }
    }
}
