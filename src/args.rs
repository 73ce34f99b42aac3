use crate::model::{
    constants::{DEFAULT_RATING, DEFAULT_RD, DEFAULT_VOLATILITY, TAU},
    structures::match_result::MatchResult
};
use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Glicko-2 Rater",
    long_about = "Applies one Glicko-2 rating period to a single player and prints the new rating as JSON"
)]
pub struct Args {
    /// Rating before the period, on the public (Glicko) scale
    #[arg(short, long, default_value_t = DEFAULT_RATING, allow_negative_numbers = true)]
    pub rating: f64,

    /// Rating deviation before the period, on the public scale
    #[arg(short = 'd', long, default_value_t = DEFAULT_RD)]
    pub rd: f64,

    /// Volatility before the period
    #[arg(short, long, default_value_t = DEFAULT_VOLATILITY)]
    pub volatility: f64,

    /// System constant constraining the change in volatility.
    /// Reasonable values lie between 0.3 and 1.2
    #[arg(short, long, env = "GLICKO2_TAU", default_value_t = TAU)]
    pub tau: f64,

    /// A game played this period, formatted rating:rd:outcome where outcome
    /// is 1 (win), 0.5 (draw) or 0 (loss). Repeat once per game.
    #[arg(short, long = "opponent", value_name = "RATING:RD:OUTCOME")]
    pub opponents: Vec<MatchResult>,

    /// Treat the period as inactive, only growing the deviation
    #[arg(short, long, action = clap::ArgAction::SetTrue, conflicts_with = "opponents")]
    pub inactive: bool,

    /// Log filter, either a level (trace, debug, info, warn, error) or a
    /// full directive such as `glicko2_rater=trace`
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
