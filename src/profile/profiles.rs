use crate::*;

/// Depth-first enumerator over every legal [`Profile`].
///
/// Player 1's choice is the outermost loop, player 2's the next, and so on.
/// Each player skips positions already taken earlier in the same profile, so
/// every yielded profile is pairwise distinct. Output is in lexicographic
/// tick order whenever candidate lists are sorted, which [`Seat`] guarantees.
pub struct Profiles {
    choices: Vec<Vec<Tick>>,
    cursor: Vec<usize>,
    chosen: Vec<Tick>,
}

impl Profiles {
    pub fn new(space: &Space, seats: &[Seat]) -> Self {
        assert!(!seats.is_empty(), "profiles need at least one seat");
        Self {
            choices: seats.iter().map(|s| s.candidates(space)).collect(),
            cursor: vec![0; seats.len()],
            chosen: Vec::with_capacity(seats.len()),
        }
    }
    /// Every profile of `players` distinct positions, optionally with the
    /// first mover restricted to the lower half of the space.
    pub fn enumerate(space: &Space, players: usize, mirror: bool) -> Self {
        Self::new(space, &Seat::lineup(players, None, mirror))
    }
    fn players(&self) -> usize {
        self.choices.len()
    }
}

impl Iterator for Profiles {
    type Item = Profile;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.chosen.len();
            if depth == self.players() {
                let profile = Profile::from(self.chosen.clone());
                self.chosen.pop();
                return Some(profile);
            }
            let start = self.cursor[depth];
            let found = self.choices[depth][start..]
                .iter()
                .position(|tick| !self.chosen.contains(tick));
            match found {
                Some(offset) => {
                    let index = start + offset;
                    self.cursor[depth] = index + 1;
                    self.chosen.push(self.choices[depth][index]);
                    if let Some(next) = self.cursor.get_mut(depth + 1) {
                        *next = 0;
                    }
                }
                None if depth == 0 => return None,
                None => {
                    self.chosen.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling(n: usize, k: usize) -> usize {
        (0..k).map(|i| n - i).product()
    }

    #[test]
    fn counts_match_falling_factorial() {
        let space = Space::new(6);
        for players in 1..=4 {
            let n = Profiles::enumerate(&space, players, false).count();
            assert_eq!(n, falling(space.size(), players), "{} players", players);
        }
    }

    #[test]
    fn mirror_restricts_only_first_mover() {
        let space = Space::new(6);
        let profiles = Profiles::enumerate(&space, 3, true).collect::<Vec<_>>();
        assert_eq!(profiles.len(), 4 * 6 * 5);
        assert!(profiles.iter().all(|p| space.coordinate(p.get(0)) <= MIRROR_AXIS));
        assert!(profiles.iter().any(|p| p.get(1) == space.hi()));
    }

    #[test]
    fn all_distinct_and_sorted() {
        let space = Space::new(5);
        let profiles = Profiles::enumerate(&space, 3, false).collect::<Vec<_>>();
        assert!(profiles.iter().all(Profile::is_distinct));
        assert!(profiles.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pinned_seat_is_singleton() {
        let space = Space::new(4);
        let seats = Seat::lineup(3, Some(space.lo()), true);
        let profiles = Profiles::new(&space, &seats).collect::<Vec<_>>();
        assert_eq!(profiles.len(), 4 * 3);
        assert!(profiles.iter().all(|p| p.get(0) == space.lo()));
        assert!(profiles.iter().all(|p| p.get(1) != space.lo()));
    }

    #[test]
    fn pins_beyond_first_seat() {
        let space = Space::new(4);
        let seats = [Seat::Free, Seat::Pinned(Tick::from(2)), Seat::Free];
        let profiles = Profiles::new(&space, &seats).collect::<Vec<_>>();
        assert_eq!(profiles.len(), 4 * 3);
        assert!(profiles.iter().all(|p| p.get(1) == Tick::from(2)));
        assert!(profiles.iter().all(Profile::is_distinct));
    }

    #[test]
    fn impossible_lineup_yields_nothing() {
        let space = Space::new(1);
        assert_eq!(Profiles::enumerate(&space, 3, false).count(), 0);
    }
}
