use crate::model::error::RatingError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// Result of a single game, from the rated player's point of view
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Loss,
    Draw,
    Win
}

impl Outcome {
    pub fn score(self) -> f64 {
        match self {
            Outcome::Loss => 0.0,
            Outcome::Draw => 0.5,
            Outcome::Win => 1.0
        }
    }
}

impl TryFrom<f64> for Outcome {
    type Error = RatingError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v == 0.0 {
            Ok(Outcome::Loss)
        } else if v == 0.5 {
            Ok(Outcome::Draw)
        } else if v == 1.0 {
            Ok(Outcome::Win)
        } else {
            Err(RatingError::InvalidOutcome(v))
        }
    }
}
