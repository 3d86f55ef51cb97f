use crate::*;

/// Win probabilities, one per player, aligned with the profile they score.
///
/// Entries are non-negative and sum to 1: every point of [0,1] belongs to
/// exactly one nearest player, up to a measure-zero set of midpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Payoff(Box<[Probability]>);

impl Payoff {
    /// Score a set of pairwise-distinct positions.
    ///
    /// Each player's share is the sum of a right and a left contribution.
    /// To the right, the nearest larger position (or 1.0 if there is none)
    /// bounds the share. If that bound is the unoccupied boundary 1.0, the
    /// player takes the whole span `1 - x`; otherwise the gap to the
    /// neighbor is split at its midpoint. The left side mirrors this with
    /// the boundary 0.0. A player sitting exactly on a boundary therefore
    /// never receives the extension on that side.
    pub fn compute(positions: &[Coordinate]) -> Self {
        debug_assert!(
            positions
                .iter()
                .enumerate()
                .all(|(i, a)| positions[i + 1..].iter().all(|b| a != b)),
            "colliding positions {:?}",
            positions
        );
        let lo_open = !positions.contains(&0.0);
        let hi_open = !positions.contains(&1.0);
        positions
            .iter()
            .map(|&x| {
                let larger = positions
                    .iter()
                    .copied()
                    .filter(|&y| y > x)
                    .fold(1.0, Coordinate::min);
                let smaller = positions
                    .iter()
                    .copied()
                    .filter(|&y| y < x)
                    .fold(0.0, Coordinate::max);
                let right = match larger == 1.0 && hi_open {
                    true => 1.0 - x,
                    false => (larger - x) / 2.0,
                };
                let left = match smaller == 0.0 && lo_open {
                    true => x,
                    false => (x - smaller) / 2.0,
                };
                right + left
            })
            .collect()
    }
    /// Score a profile of grid positions.
    pub fn of(profile: &Profile, space: &Space) -> Self {
        Self::compute(&profile.coordinates(space))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Win probability of the player at `seat` (0-indexed).
    pub fn get(&self, seat: usize) -> Probability {
        self.0[seat]
    }
    pub fn values(&self) -> &[Probability] {
        &self.0
    }
    pub fn total(&self) -> Probability {
        self.0.iter().sum()
    }
}

impl FromIterator<Probability> for Payoff {
    fn from_iter<I: IntoIterator<Item = Probability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self
            .0
            .iter()
            .map(|p| format!("{:.4}", p))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", values)
    }
}
