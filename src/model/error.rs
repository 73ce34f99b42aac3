use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    #[error("Match list lengths differ: {ratings} ratings, {rds} deviations, {outcomes} outcomes")]
    MismatchedLengths { ratings: usize, rds: usize, outcomes: usize },

    #[error("Rating must be a finite number, got {0}")]
    InvalidRating(f64),

    #[error("Rating deviation must be a finite, non-negative number, got {0}")]
    InvalidDeviation(f64),

    #[error("Volatility must be a finite, positive number, got {0}")]
    InvalidVolatility(f64),

    #[error("Outcome must be 0 (loss), 0.5 (draw) or 1 (win), got {0}")]
    InvalidOutcome(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid match result '{0}', expected rating:rd:outcome")]
    InvalidMatchResult(String),

    #[error("Volatility iteration became numerically unstable at x = {0}")]
    NumericInstability(f64),

    #[error("Volatility iteration did not converge after {0} iterations")]
    NonConvergence(usize)
}

pub fn check_rating(rating: f64) -> Result<f64, RatingError> {
    if rating.is_finite() {
        Ok(rating)
    } else {
        Err(RatingError::InvalidRating(rating))
    }
}

pub fn check_rd(rd: f64) -> Result<f64, RatingError> {
    if rd.is_finite() && rd >= 0.0 {
        Ok(rd)
    } else {
        Err(RatingError::InvalidDeviation(rd))
    }
}

pub fn check_volatility(volatility: f64) -> Result<f64, RatingError> {
    if volatility.is_finite() && volatility > 0.0 {
        Ok(volatility)
    } else {
        Err(RatingError::InvalidVolatility(volatility))
    }
}
