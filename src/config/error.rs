use crate::*;

/// Reasons a [`Config`] cannot describe a playable game.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    TooFewPlayers(usize),
    ZeroResolution,
    ResolutionTooLarge(usize),
    TooManyPlayers { players: usize, points: usize },
    OutOfRange(Coordinate),
    OffGrid { value: Coordinate, resolution: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPlayers(n) => {
                write!(f, "need at least {} players, got {}", MIN_PLAYERS, n)
            }
            Self::ZeroResolution => write!(f, "resolution must be a positive integer"),
            Self::ResolutionTooLarge(n) => {
                write!(f, "resolution {} exceeds the maximum of {}", n, MAX_RESOLUTION)
            }
            Self::TooManyPlayers { players, points } => write!(
                f,
                "{} players cannot hold distinct positions on {} grid points",
                players, points
            ),
            Self::OutOfRange(x) => write!(f, "first position {} lies outside [0,1]", x),
            Self::OffGrid { value, resolution } => write!(
                f,
                "first position {} is not a multiple of 1/{}",
                value, resolution
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
