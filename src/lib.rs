//! Sequential Hotelling location games on the unit interval.
//!
//! Players take turns choosing distinct positions in [0,1], each observing
//! the choices made before them. A player's payoff is the probability that a
//! uniformly random point lands closer to them than to any rival. Equilibrium
//! play is found by backward induction over a discretized space.
//!
//! # Module Structure
//!
//! - `space` — Discretization of [0,1] into ticks i/N
//! - `profile` — Strategy profiles and their enumeration
//! - `payoff` — Win-probability rule for a set of positions
//! - `table` — Payoff table of every legal profile
//! - `resolve` — Backward induction and tie-break policies
//! - `report` — Per-player equilibrium summary
//! - `config` — Game configuration and validation
//! - `game` — End-to-end solve pipeline
mod config;
mod game;
mod payoff;
mod profile;
mod report;
mod resolve;
mod space;
mod table;

pub use config::*;
pub use game::*;
pub use payoff::*;
pub use profile::*;
pub use report::*;
pub use resolve::*;
pub use space::*;
pub use table::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A location on the unit interval.
pub type Coordinate = f64;
/// Share of the interval won by a player.
pub type Probability = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Fewest players for which the sequential game is meaningful.
pub const MIN_PLAYERS: usize = 2;
/// Default number of players.
pub const DEFAULT_PLAYERS: usize = 3;
/// Default discretization: positions are multiples of 1/24.
pub const DEFAULT_RESOLUTION: usize = 24;
/// Largest grid resolution; keeps every tick index and N + 1 within `u32`.
pub const MAX_RESOLUTION: usize = (u32::MAX - 1) as usize;
/// Decimal places in the textual report.
pub const DEFAULT_PRECISION: usize = 4;
/// Axis of the left-right symmetry used to halve the first player's choices.
pub const MIRROR_AXIS: Coordinate = 0.5;

// ============================================================================
// NUMERICS
// ============================================================================
/// Payoffs closer than this are treated as equal when finding best responses.
/// Mirror-image profiles differ by a few ulps after floating-point rounding.
pub const TIE_TOLERANCE: Probability = 1e-9;
/// Slack when snapping a pinned coordinate onto the grid.
pub const GRID_TOLERANCE: Coordinate = 1e-9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, optionally mirrored into a file.
/// Location, target and thread columns are suppressed.
#[cfg(feature = "native")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
