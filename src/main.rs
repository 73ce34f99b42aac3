use clap::Parser;
use glicko2_rater::{
    args::Args,
    model::{structures::player_state::PlayerState, Glicko2Config, RatingError, RatingUpdater}
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let state = match run(&args) {
        Ok(state) => state,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&state) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize player state: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<PlayerState, RatingError> {
    let config = Glicko2Config::with_tau(args.tau);
    let mut player = RatingUpdater::with_config(args.rating, args.rd, args.volatility, config)?;

    if args.inactive {
        info!("Applying inactive rating period");
        player.advance_inactive();
    } else {
        info!("Rating period with {} games", args.opponents.len());
        player.rate_period(&args.opponents)?;
    }

    Ok(player.state())
}
