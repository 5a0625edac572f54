//! Target and tile selection for the Countdown numbers round.
//!
//! A round consists of a three-digit target and a hand of six tiles drawn
//! from two pools. The player picks how many "big" tiles they want and the
//! rest of the hand is made up of "small" tiles.
//!
//! ## Core Types
//!
//! - [`Tile`] — A single face value, either big (25, 50, 75, 100) or small (1–10)
//! - [`Pool`] — The draftable slots of one tile pool, held as a bitmask
//! - [`Hand`] — Six ordered tiles satisfying the multiplicity rules
//! - [`Selector`] — Draws targets and hands from an injected random source
//!
//! ## Presentation Support
//!
//! - [`Choice`] — The five "how many big ones" selections
//! - [`Reveal`] — A flicker sequence of provisional targets ending on the final one
//! - [`Round`] — A dealt hand together with its target
//! - [`Shared`] — A mutex-serialized [`Selector`] for concurrent callers
mod choice;
mod error;
mod round;
mod selector;
mod tiles;

pub use choice::*;
pub use error::*;
pub use round::*;
pub use selector::*;
pub use tiles::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// The number a player has to reach with the hand.
pub type Target = i32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TARGET PARAMETERS
// ============================================================================
/// Inclusive lower bound of a three-digit target.
pub const TARGET_LOW: Target = 101;
/// Exclusive upper bound of a three-digit target.
pub const TARGET_HIGH: Target = 999;
/// Provisional targets shown before the final one freezes.
pub const REVEAL_FRAMES: usize = 25;

// ============================================================================
// HAND PARAMETERS
// ============================================================================
/// Tiles dealt per round.
pub const HAND_SIZE: usize = 6;
/// Face values of the big pool, one copy each.
pub const BIG_NUMBERS: [u8; 4] = [25, 50, 75, 100];
/// Most big tiles a hand can hold (the whole big pool).
pub const MAX_BIG: usize = BIG_NUMBERS.len();
/// Largest small face value; small tiles run 1 through this.
pub const SMALL_MAX: u8 = 10;
/// Copies of each small face value in the small pool.
pub const SMALL_COPIES: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
