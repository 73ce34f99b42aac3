use crate::model::{
    rating_updater::RatingUpdater,
    structures::{match_result::MatchResult, outcome::Outcome}
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

/// The three opponents of Glickman's worked example: a win against 1400,
/// then losses against 1550 and 1700
pub fn glickman_results() -> Vec<MatchResult> {
    vec![
        MatchResult::new(1400.0, 30.0, Outcome::Win),
        MatchResult::new(1550.0, 100.0, Outcome::Loss),
        MatchResult::new(1700.0, 300.0, Outcome::Loss),
    ]
}

pub fn generate_player(rating: f64, rd: f64, volatility: f64) -> RatingUpdater {
    RatingUpdater::new(rating, rd, volatility).unwrap_or_else(|e| panic!("Invalid test player: {}", e))
}

/// Random but reproducible opponents, rated around `center`
pub fn generate_results(n: usize, center: f64, seed: u64) -> Vec<MatchResult> {
    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let outcomes = Outcome::iter().collect::<Vec<_>>();

    (0..n)
        .map(|_| {
            let rating = center + rng.random_range(-400.0..=400.0);
            let rd = rng.random_range(30.0..=350.0);
            let outcome = outcomes[rng.random_range(0..outcomes.len())];

            MatchResult::new(rating, rd, outcome)
        })
        .collect()
}

/// Splits results into the parallel lists accepted by [`RatingUpdater::update`]
pub fn split_results(results: &[MatchResult]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let ratings = results.iter().map(|r| r.opponent_rating).collect();
    let rds = results.iter().map(|r| r.opponent_rd).collect();
    let outcomes = results.iter().map(|r| r.outcome.score()).collect();

    (ratings, rds, outcomes)
}
