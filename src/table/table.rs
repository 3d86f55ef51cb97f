use crate::*;

/// Rows of (profile, payoff), kept in lexicographic profile order.
///
/// Sorting is the index: rows agreeing on the first `k` movers form one
/// contiguous run, so grouping by a prefix is a single linear pass and
/// selecting a prefix is two binary searches. No auxiliary map is built,
/// which matters because the full table grows as N^players.
///
/// The same type carries the full table and every reduced table produced
/// by backward induction. Tables are never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    space: Space,
    players: usize,
    rows: Vec<Row>,
}

impl Table {
    /// Score every legal profile for the given seats.
    pub fn build(space: &Space, seats: &[Seat]) -> Self {
        Self::from_profiles(space, seats.len(), Profiles::new(space, seats))
    }
    /// Score an arbitrary collection of distinct profiles.
    pub fn from_profiles<I>(space: &Space, players: usize, profiles: I) -> Self
    where
        I: IntoIterator<Item = Profile>,
    {
        let rows = profiles
            .into_iter()
            .inspect(|p| assert_eq!(p.len(), players, "profile {} has wrong arity", p))
            .map(|p| Row::new(p, space))
            .collect();
        Self::from_rows(*space, players, rows)
    }
    /// Wrap already-scored rows, restoring profile order.
    pub fn from_rows(space: Space, players: usize, mut rows: Vec<Row>) -> Self {
        if !rows.is_sorted_by(|a, b| a.profile <= b.profile) {
            rows.sort_unstable_by(|a, b| a.profile.cmp(&b.profile));
        }
        Self {
            space,
            players,
            rows,
        }
    }
    pub fn space(&self) -> &Space {
        &self.space
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Rows whose leading positions equal `prefix`. Empty if none match.
    pub fn select(&self, prefix: &[Tick]) -> &[Row] {
        let depth = prefix.len();
        assert!(depth <= self.players, "prefix longer than profile");
        let lo = self
            .rows
            .partition_point(|r| r.profile.prefix(depth) < prefix);
        let hi = self
            .rows
            .partition_point(|r| r.profile.prefix(depth) <= prefix);
        &self.rows[lo..hi]
    }
    /// Rows where the player at `seat` holds `tick`, in table order.
    /// Linear scan; prefer [`Table::select`] for leading seats.
    pub fn at_seat(&self, seat: usize, tick: Tick) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |r| r.profile.get(seat) == tick)
    }
    /// Runs of rows sharing the first `depth` positions.
    /// Depth zero yields the whole table as a single group.
    pub fn groups(&self, depth: usize) -> impl Iterator<Item = &[Row]> {
        self.rows
            .chunk_by(move |a, b| a.profile.prefix(depth) == b.profile.prefix(depth))
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} players over {} ({} rows)", self.players, self.space, self.len())?;
        for row in &self.rows {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(resolution: usize, players: usize) -> Table {
        let space = Space::new(resolution);
        Table::build(&space, &Seat::lineup(players, None, false))
    }

    #[test]
    fn rebuilding_is_idempotent() {
        assert_eq!(table(8, 3), table(8, 3));
    }

    #[test]
    fn shuffled_profiles_are_reordered() {
        let space = Space::new(5);
        let mut profiles = Profiles::enumerate(&space, 2, false).collect::<Vec<_>>();
        profiles.reverse();
        let shuffled = Table::from_profiles(&space, 2, profiles);
        assert_eq!(shuffled, table(5, 2));
    }

    #[test]
    fn select_matches_linear_filter() {
        let t = table(6, 3);
        for a in t.space().ticks() {
            for b in t.space().ticks() {
                let prefix = [a, b];
                let selected = t.select(&prefix);
                let expected = t
                    .rows()
                    .iter()
                    .filter(|r| r.profile.prefix(2) == prefix)
                    .collect::<Vec<_>>();
                assert_eq!(selected.iter().collect::<Vec<_>>(), expected);
            }
        }
    }

    #[test]
    fn select_missing_prefix_is_empty() {
        let t = table(4, 2);
        let tick = Tick::from(1);
        assert!(t.select(&[tick, tick]).is_empty());
        assert_eq!(t.select(&[]).len(), t.len());
    }

    #[test]
    fn groups_partition_rows() {
        let t = table(5, 3);
        for depth in 0..=3 {
            let groups = t.groups(depth).collect::<Vec<_>>();
            assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), t.len());
            for group in &groups {
                let key = group[0].profile.prefix(depth);
                assert!(group.iter().all(|r| r.profile.prefix(depth) == key));
            }
        }
        assert_eq!(t.groups(0).count(), 1);
        assert_eq!(t.groups(1).count(), t.space().size());
    }

    #[test]
    fn at_seat_filters_any_slot() {
        let t = table(4, 3);
        let tick = Tick::from(2);
        let rows = t.at_seat(2, tick).collect::<Vec<_>>();
        assert_eq!(rows.len(), 4 * 3);
        assert!(rows.iter().all(|r| r.profile.get(2) == tick));
    }
}
