//! Two-party shotgun roulette: game engine and outcome statistics.
//!
//! A magazine of live and blank charges is fired by a player and a dealer
//! in turn, each aiming at themselves or at the other. This crate estimates
//! the outcome distribution of that game by Monte Carlo sampling, or computes
//! it exactly by enumerating every distinct charge ordering.
//!
//! # Module Structure
//!
//! - `shells`: Charges, clamped loadouts, magazines, distinct arrangements
//! - `strategy`: Decision interface, parameter bundle, built-in personas
//! - `game`: Turn state machine and the single-game simulator
//! - `analysis`: Configuration, Monte Carlo, exhaustive enumeration, trends
pub mod analysis;
pub mod game;
pub mod shells;
pub mod strategy;

pub use analysis::*;
pub use game::*;
pub use shells::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Remaining lives of an actor.
pub type Health = u16;
/// Draw probabilities, strategy parameters, and percentage rates.
pub type Probability = f64;

// ============================================================================
// MAGAZINE LIMITS
// ============================================================================
/// Fewest charges a reload may contain.
pub const MIN_CHARGES: usize = 2;
/// Default ceiling on charges per reload (bounds combinatorial blowup).
pub const MAX_CHARGES: usize = 8;

// ============================================================================
// GAME DEFAULTS
// ============================================================================
/// Live charges per reload.
pub const LIVE_CHARGES: usize = 3;
/// Blank charges per reload.
pub const BLANK_CHARGES: usize = 3;
/// Starting health of the player.
pub const PLAYER_HEALTH: Health = 2;
/// Starting health of the dealer.
pub const DEALER_HEALTH: Health = 2;
/// Hard ceiling on turns per game. Reached only by a misbehaving strategy.
pub const MAX_TURNS: usize = 10_000;

// ============================================================================
// STRATEGY PARAMETERS
// ============================================================================
/// Blank probability above which Conservative aims at itself.
pub const THRESHOLD: Probability = 0.7;
/// Dynamic plays aggressively while own health <= opponent health × this.
pub const RISK_TOLERANCE: Probability = 1.0;
/// Blank probability above which a comfortable Dynamic aims at itself.
pub const CAUTION_LEVEL: Probability = 0.5;
/// Chance that Dynamic ignores the odds and picks a target at random.
pub const BLUFF_FACTOR: Probability = 0.1;

// ============================================================================
// SAMPLING & ENUMERATION
// ============================================================================
/// Monte Carlo rounds per run.
pub const ROUNDS: usize = 1_000;
/// Rounds between points of the cumulative win-rate series.
pub const CONVERGENCE_INTERVAL: usize = 10;
/// Enumerations larger than this many games are logged as a warning.
pub const EXHAUSTIVE_WARN: u128 = 1 << 24;
/// Games handed to the worker pool at once. Bounds memory held by results
/// awaiting an in-order merge.
pub const BATCH_SIZE: usize = 1 << 14;
/// Percent tolerance for the rates-sum-to-100 invariant.
pub const RATE_TOLERANCE: Probability = 1e-9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
