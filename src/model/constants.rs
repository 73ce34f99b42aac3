// Scale constants
/// Converts between the public Glicko scale and the internal Glicko-2 scale (400 / ln 10).
pub const RATING_SCALE: f64 = 173.717_792_761_300_73;
pub const RATING_OFFSET: f64 = 1500.0;
// Defaults for an unrated player
pub const DEFAULT_RATING: f64 = 1500.0;
pub const DEFAULT_RD: f64 = 350.0;
pub const DEFAULT_VOLATILITY: f64 = 0.06;
// System constant, constrains the change in volatility per rating period
pub const TAU: f64 = 0.5;
// Volatility root finder
pub const CONVERGENCE_TOLERANCE: f64 = 0.000_001;
pub const MAX_ITERATIONS: usize = 1000;
