//! The Glicko-2 building blocks. Every value here is on the internal scale.

use std::f64::consts::PI;

/// An opponent converted to the internal scale, together with the score
/// the rated player achieved against them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledOpponent {
    pub rating: f64,
    pub rd: f64,
    pub score: f64
}

/// Impact weight of an opponent's deviation. Uncertain opponents count for less.
pub fn g(rd: f64) -> f64 {
    1.0 / (1.0 + 3.0 * rd.powi(2) / PI.powi(2)).sqrt()
}

/// Expected score of a player rated `rating` against the given opponent
pub fn e(rating: f64, opponent_rating: f64, opponent_rd: f64) -> f64 {
    1.0 / (1.0 + (-g(opponent_rd) * (rating - opponent_rating)).exp())
}

/// Estimated variance of the player's rating based only on game outcomes
pub fn v(rating: f64, opponents: &[ScaledOpponent]) -> f64 {
    let sum: f64 = opponents
        .iter()
        .map(|o| {
            let expected = e(rating, o.rating, o.rd);
            g(o.rd).powi(2) * expected * (1.0 - expected)
        })
        .sum();

    1.0 / sum
}

/// Σ g(rd) * (score - E), shared by `delta` and the final rating step
pub fn improvement(rating: f64, opponents: &[ScaledOpponent]) -> f64 {
    opponents
        .iter()
        .map(|o| g(o.rd) * (o.score - e(rating, o.rating, o.rd)))
        .sum()
}

/// Estimated improvement in rating over the period
pub fn delta(rating: f64, opponents: &[ScaledOpponent], vv: f64) -> f64 {
    vv * improvement(rating, opponents)
}

/// Deviation at the start of a rating period, grown by the volatility
pub fn pre_period_rd(rd: f64, volatility: f64) -> f64 {
    (rd.powi(2) + volatility.powi(2)).sqrt()
}
