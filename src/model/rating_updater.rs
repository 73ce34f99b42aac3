use super::{
    config::Glicko2Config,
    constants::{RATING_OFFSET, RATING_SCALE, TAU},
    error::{check_rating, check_rd, check_volatility, RatingError},
    functions::{delta, improvement, pre_period_rd, v, ScaledOpponent},
    structures::{match_result::MatchResult, outcome::Outcome, player_state::PlayerState},
    volatility::{new_volatility, VolatilityProblem}
};
use itertools::{izip, Itertools};
use tracing::{debug, warn};

/// A single player's Glicko-2 rating, advanced once per rating period.
///
/// Rating and deviation are stored on the internal scale only. The public
/// (Glicko) scale is reachable through [`RatingUpdater::get_rating`] /
/// [`RatingUpdater::set_rating`] and [`RatingUpdater::get_rd`] /
/// [`RatingUpdater::set_rd`], which perform the conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingUpdater {
    rating: f64,
    rd: f64,
    vol: f64,
    config: Glicko2Config
}

impl RatingUpdater {
    pub const TAU: f64 = TAU;
    pub const RATING_SCALE: f64 = RATING_SCALE;

    pub fn new(rating: f64, rd: f64, vol: f64) -> Result<Self, RatingError> {
        Self::with_config(rating, rd, vol, Glicko2Config::default())
    }

    pub fn with_config(rating: f64, rd: f64, vol: f64, config: Glicko2Config) -> Result<Self, RatingError> {
        config.validate()?;

        let mut updater = RatingUpdater {
            rating: 0.0,
            rd: 0.0,
            vol: check_volatility(vol)?,
            config
        };
        updater.set_rating(check_rating(rating)?);
        updater.set_rd(check_rd(rd)?);

        Ok(updater)
    }

    pub fn from_state(state: &PlayerState) -> Result<Self, RatingError> {
        Self::new(state.rating, state.rd, state.volatility)
    }

    pub fn state(&self) -> PlayerState {
        PlayerState {
            rating: self.get_rating(),
            rd: self.get_rd(),
            volatility: self.vol
        }
    }

    pub fn config(&self) -> &Glicko2Config {
        &self.config
    }

    pub fn get_rating(&self) -> f64 {
        self.rating * RATING_SCALE + RATING_OFFSET
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = (rating - RATING_OFFSET) / RATING_SCALE;
    }

    pub fn get_rd(&self) -> f64 {
        self.rd * RATING_SCALE
    }

    pub fn set_rd(&mut self, rd: f64) {
        self.rd = rd / RATING_SCALE;
    }

    pub fn vol(&self) -> f64 {
        self.vol
    }

    pub fn set_vol(&mut self, vol: f64) {
        self.vol = vol;
    }

    /// Grows the deviation for a period in which the player did not compete.
    /// Rating and volatility are unchanged.
    pub fn advance_inactive(&mut self) {
        self.rd = pre_period_rd(self.rd, self.vol);
    }

    pub fn did_not_compete(&mut self) {
        self.advance_inactive()
    }

    /// # Glicko-2 update
    ///
    /// Rates one period of games. The three lists are parallel: entry `i`
    /// holds the public rating and deviation of the `i`th opponent and the
    /// score against them (1 win, 0.5 draw, 0 loss).
    ///
    /// Steps:
    /// 1. Convert opponents to the internal scale.
    /// 2. Estimate the variance `v` and improvement `delta` from the results.
    /// 3. Solve for the new volatility.
    /// 4. Grow the deviation by the new volatility, then shrink it by `v`.
    /// 5. Move the rating by the new deviation squared times the weighted
    ///    surprise of each result.
    ///
    /// An empty period leaves the player untouched; use
    /// [`RatingUpdater::advance_inactive`] (or [`RatingUpdater::rate_period`])
    /// for inactivity. On error the player is left untouched as well.
    pub fn update(&mut self, ratings: &[f64], rds: &[f64], outcomes: &[f64]) -> Result<(), RatingError> {
        let opponents = scale_opponents(ratings, rds, outcomes)?;
        self.validate()?;

        if opponents.is_empty() {
            warn!("update called without any games, rating left unchanged");
            return Ok(());
        }

        let vv = v(self.rating, &opponents);
        let surprise = improvement(self.rating, &opponents);
        let problem = VolatilityProblem {
            rd: self.rd,
            volatility: self.vol,
            delta: delta(self.rating, &opponents, vv),
            variance: vv
        };
        let vol = new_volatility(&problem, &self.config)?;

        let rd_star = pre_period_rd(self.rd, vol);
        let rd = 1.0 / (1.0 / rd_star.powi(2) + 1.0 / vv).sqrt();
        let rating = self.rating + rd.powi(2) * surprise;

        let before = self.state();
        self.rating = rating;
        self.rd = rd;
        self.vol = vol;

        debug!(
            games = opponents.len(),
            rating_before = before.rating,
            rating_after = self.get_rating(),
            rd_before = before.rd,
            rd_after = self.get_rd(),
            volatility_before = before.volatility,
            volatility_after = self.vol,
            "rating period processed"
        );

        Ok(())
    }

    pub fn update_with_results(&mut self, results: &[MatchResult]) -> Result<(), RatingError> {
        let (ratings, rds, outcomes): (Vec<f64>, Vec<f64>, Vec<f64>) = results
            .iter()
            .map(|r| (r.opponent_rating, r.opponent_rd, r.outcome.score()))
            .multiunzip();

        self.update(&ratings, &rds, &outcomes)
    }

    /// Applies one rating period: an inactive period when `results` is empty,
    /// a full update otherwise
    pub fn rate_period(&mut self, results: &[MatchResult]) -> Result<(), RatingError> {
        if results.is_empty() {
            self.validate()?;
            self.advance_inactive();
            debug!(rd_after = self.get_rd(), "inactive rating period processed");
            return Ok(());
        }

        self.update_with_results(results)
    }

    fn validate(&self) -> Result<(), RatingError> {
        check_rating(self.rating).map_err(|_| RatingError::InvalidRating(self.get_rating()))?;
        check_rd(self.rd).map_err(|_| RatingError::InvalidDeviation(self.get_rd()))?;
        check_volatility(self.vol)?;

        Ok(())
    }
}

impl Default for RatingUpdater {
    fn default() -> Self {
        let state = PlayerState::default();

        RatingUpdater {
            rating: (state.rating - RATING_OFFSET) / RATING_SCALE,
            rd: state.rd / RATING_SCALE,
            vol: state.volatility,
            config: Glicko2Config::default()
        }
    }
}

fn scale_opponents(ratings: &[f64], rds: &[f64], outcomes: &[f64]) -> Result<Vec<ScaledOpponent>, RatingError> {
    if ratings.len() != rds.len() || ratings.len() != outcomes.len() {
        return Err(RatingError::MismatchedLengths {
            ratings: ratings.len(),
            rds: rds.len(),
            outcomes: outcomes.len()
        });
    }

    izip!(ratings, rds, outcomes)
        .map(|(&rating, &rd, &outcome)| -> Result<ScaledOpponent, RatingError> {
            Ok(ScaledOpponent {
                rating: (check_rating(rating)? - RATING_OFFSET) / RATING_SCALE,
                rd: check_rd(rd)? / RATING_SCALE,
                score: Outcome::try_from(outcome)?.score()
            })
        })
        .collect()
}
