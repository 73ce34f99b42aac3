use super::{config::Glicko2Config, error::RatingError};
use tracing::trace;

/// Inputs to the volatility estimate, all on the internal scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityProblem {
    /// The player's deviation before this period
    pub rd: f64,
    /// The player's volatility before this period
    pub volatility: f64,
    /// Estimated improvement, see [`super::functions::delta`]
    pub delta: f64,
    /// Estimated variance, see [`super::functions::v`]
    pub variance: f64
}

impl VolatilityProblem {
    /// ln(σ²), the starting point of the search
    pub fn origin(&self) -> f64 {
        self.volatility.powi(2).ln()
    }

    /// The function whose root is ln(σ'²)
    pub fn f(&self, x: f64, tau: f64) -> f64 {
        let ex = x.exp();
        let rd2 = self.rd.powi(2);
        let numerator = ex * (self.delta.powi(2) - rd2 - self.variance - ex);
        let denominator = 2.0 * (rd2 + self.variance + ex).powi(2);

        numerator / denominator - (x - self.origin()) / tau.powi(2)
    }
}

/// Illinois bracket `(a, f(a))`, `(b, f(b))` around the root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub a: f64,
    pub fa: f64,
    pub b: f64,
    pub fb: f64
}

impl Bracket {
    pub fn new(a: f64, b: f64, f: impl Fn(f64) -> f64) -> Self {
        Bracket { a, fa: f(a), b, fb: f(b) }
    }

    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }

    pub fn converged(&self, tolerance: f64) -> bool {
        self.width() <= tolerance
    }

    /// One secant step. When the new point lands on the same side as `b`
    /// the retained endpoint's value is halved instead of swapped out.
    pub fn step(self, f: impl Fn(f64) -> f64) -> Result<Self, RatingError> {
        let denominator = self.fb - self.fa;
        if denominator == 0.0 {
            return Err(RatingError::NumericInstability(self.b));
        }

        let c = self.a + (self.a - self.b) * self.fa / denominator;
        if !c.is_finite() {
            return Err(RatingError::NumericInstability(c));
        }
        let fc = f(c);
        if !fc.is_finite() {
            return Err(RatingError::NumericInstability(c));
        }

        let (a, fa) = if fc * self.fb <= 0.0 {
            (self.b, self.fb)
        } else {
            (self.a, self.fa / 2.0)
        };

        Ok(Bracket { a, fa, b: c, fb: fc })
    }
}

/// Upper end of the initial bracket
fn upper_bound(problem: &VolatilityProblem, config: &Glicko2Config) -> Result<f64, RatingError> {
    let a = problem.origin();
    let excess = problem.delta.powi(2) - problem.rd.powi(2) - problem.variance;
    if excess > 0.0 {
        return Ok(excess.ln());
    }

    let mut k = 1;
    while problem.f(a - k as f64 * config.tau, config.tau) < 0.0 {
        if k >= config.max_iterations {
            return Err(RatingError::NonConvergence(k));
        }
        k += 1;
    }

    Ok(a - k as f64 * config.tau)
}

/// Solves for the player's new volatility
pub fn new_volatility(problem: &VolatilityProblem, config: &Glicko2Config) -> Result<f64, RatingError> {
    let f = |x: f64| problem.f(x, config.tau);

    let b = upper_bound(problem, config)?;
    let mut bracket = Bracket::new(problem.origin(), b, f);

    let mut iterations = 0;
    while !bracket.converged(config.convergence_tolerance) {
        if iterations == config.max_iterations {
            return Err(RatingError::NonConvergence(iterations));
        }

        bracket = bracket.step(f)?;
        iterations += 1;
        trace!(iterations, a = bracket.a, b = bracket.b, "volatility bracket narrowed");
    }

    Ok((bracket.a / 2.0).exp())
}
