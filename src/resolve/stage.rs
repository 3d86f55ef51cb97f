/// Bookkeeping for one backward-induction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// Resolving player, 0-indexed.
    pub seat: usize,
    /// Distinct prefixes of earlier movers.
    pub groups: usize,
    pub rows_in: usize,
    pub rows_out: usize,
    /// Groups in which more than one row was payoff-maximal.
    pub ties: usize,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12}{:<16}{:<16}{:<16}{:<12}",
            format!("player {}", self.seat + 1),
            format!("groups {}", self.groups),
            format!("rows in {}", self.rows_in),
            format!("rows out {}", self.rows_out),
            format!("ties {}", self.ties),
        )
    }
}
