use crate::*;

/// The candidate set a single player enumerates over.
///
/// - `Free` — every grid point
/// - `Mirror` — grid points at or left of the midpoint; valid for the first
///   mover because reflecting every position through 0.5 yields an
///   isomorphic game
/// - `Pinned(tick)` — a single externally fixed position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Free,
    Mirror,
    Pinned(Tick),
}

impl Seat {
    /// Grid points this seat may choose, before excluding earlier players.
    pub fn candidates(&self, space: &Space) -> Vec<Tick> {
        match self {
            Self::Free => space.ticks().collect(),
            Self::Mirror => space.lower_half().collect(),
            Self::Pinned(tick) => vec![*tick],
        }
    }
    /// Seats for a game with an optional first-mover pin.
    /// An unpinned first mover is restricted to the lower half when `mirror` is set.
    pub fn lineup(players: usize, first: Option<Tick>, mirror: bool) -> Vec<Self> {
        let lead = match (first, mirror) {
            (Some(tick), _) => Self::Pinned(tick),
            (None, true) => Self::Mirror,
            (None, false) => Self::Free,
        };
        std::iter::once(lead)
            .chain(std::iter::repeat(Self::Free))
            .take(players)
            .collect()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Mirror => write!(f, "mirror"),
            Self::Pinned(tick) => write!(f, "pinned {}", tick),
        }
    }
}
