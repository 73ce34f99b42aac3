use super::outcome::Outcome;
use crate::model::error::{check_rating, check_rd, RatingError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One game of a rating period: the opponent's public rating and deviation
/// at the time, and how the game went
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub opponent_rating: f64,
    pub opponent_rd: f64,
    pub outcome: Outcome
}

impl MatchResult {
    pub fn new(opponent_rating: f64, opponent_rd: f64, outcome: Outcome) -> Self {
        MatchResult {
            opponent_rating,
            opponent_rd,
            outcome
        }
    }
}

/// Parses `rating:rd:outcome`, e.g. `1400:30:1`
impl FromStr for MatchResult {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RatingError::InvalidMatchResult(s.to_string());

        let fields = s
            .split(':')
            .map(|field| field.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        let [rating, rd, score] = fields[..] else {
            return Err(invalid());
        };

        Ok(MatchResult::new(check_rating(rating)?, check_rd(rd)?, Outcome::try_from(score)?))
    }
}
