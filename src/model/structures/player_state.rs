use crate::model::constants::{DEFAULT_RATING, DEFAULT_RD, DEFAULT_VOLATILITY};
use serde::{Deserialize, Serialize};

/// A player's rating on the public scale, as persisted between rating periods
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub rating: f64,
    pub rd: f64,
    pub volatility: f64
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState {
            rating: DEFAULT_RATING,
            rd: DEFAULT_RD,
            volatility: DEFAULT_VOLATILITY
        }
    }
}
