//! Flashcard trainer for the Hi-Lo card-counting system.
//!
//! Cards are dealt one at a time, sampled uniformly with replacement. After
//! a random number of cards drawn from a configured [`config::Interval`] the
//! user is quizzed on the running count.
//!
//! The [`trainer::Trainer`] state machine owns the whole session; the
//! `trainer` binary is a terminal front end over it.
pub mod cards;
pub mod config;
pub mod count;
pub mod quiz;
pub mod schedule;
pub mod trainer;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Hi-Lo tags, running counts and guesses.
pub type Count = i32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PARAMETERS
// ============================================================================
/// Fewest cards between quizzes when nothing has been configured yet.
pub const DEFAULT_MIN_INTERVAL: usize = 7;
/// Most cards between quizzes when nothing has been configured yet.
pub const DEFAULT_MAX_INTERVAL: usize = 10;
/// Card images live at `<IMAGE_BASE><code>.png`.
pub const IMAGE_BASE: &str = "https://deckofcardsapi.com/static/img/";
/// Saved bounds, relative to the home directory.
pub const SETTINGS_FILE: &str = ".hilo.json";
/// Overrides the saved bounds location.
pub const SETTINGS_ENV: &str = "HILO_SETTINGS";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, WARN to the terminal so
/// that prompts stay readable.
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
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")?;
    Ok(())
}
