pub mod config;
pub mod constants;
pub mod error;
pub mod functions;
pub mod rating_updater;
pub mod structures;
pub mod volatility;

pub use config::Glicko2Config;
pub use error::RatingError;
pub use rating_updater::RatingUpdater;
