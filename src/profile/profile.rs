use crate::*;

/// One position per player, in move order.
///
/// Profiles order lexicographically by tick, earliest mover most
/// significant. Tables rely on this: rows sharing a prefix of early
/// movers sit next to each other.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Profile(Box<[Tick]>);

impl Profile {
    /// Number of players.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Position of the player at `seat` (0-indexed).
    pub fn get(&self, seat: usize) -> Tick {
        self.0[seat]
    }
    pub fn ticks(&self) -> &[Tick] {
        &self.0
    }
    /// Positions of the first `depth` movers.
    pub fn prefix(&self, depth: usize) -> &[Tick] {
        &self.0[..depth]
    }
    /// True if no two players share a position.
    pub fn is_distinct(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, a)| self.0[i + 1..].iter().all(|b| a != b))
    }
    pub fn coordinates(&self, space: &Space) -> Vec<Coordinate> {
        self.0.iter().map(|t| space.coordinate(*t)).collect()
    }
    /// Reflect every position through the midpoint of the space.
    pub fn mirror(&self, space: &Space) -> Self {
        self.0.iter().map(|t| space.mirror(*t)).collect()
    }
}

impl From<Vec<Tick>> for Profile {
    fn from(ticks: Vec<Tick>) -> Self {
        Self(ticks.into_boxed_slice())
    }
}

impl FromIterator<Tick> for Profile {
    fn from_iter<I: IntoIterator<Item = Tick>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ticks = self
            .0
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", ticks)
    }
}
