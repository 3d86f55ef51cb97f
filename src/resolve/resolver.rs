use crate::*;

/// Backward induction over a payoff table.
///
/// Players are resolved from the last mover to the first. At the stage for
/// the player at `seat`, rows are grouped by the positions of the `seat`
/// players who moved earlier. Within each group the resolving player keeps
/// every row that maximizes their own payoff. The surviving rows form a
/// reduced table: the later movers' best responses to every prefix, which
/// the previous stage then treats as given.
///
/// Tied rows are carried forward rather than sampled, so an earlier mover
/// never optimizes against one arbitrary draw of a later mover's
/// indifference. Only after the first mover's stage does the [`TieBreak`]
/// policy pick one row out of the first mover's maximal set. Every row in
/// that set pays the first mover the same, so the policy decides which
/// equilibrium is reported, never its value to the leader.
pub struct Resolver<B>
where
    B: TieBreak,
{
    tiebreak: B,
    stages: Vec<Stage>,
}

impl<B> Resolver<B>
where
    B: TieBreak,
{
    pub fn new(tiebreak: B) -> Self {
        Self {
            tiebreak,
            stages: Vec::new(),
        }
    }
    /// Statistics of the most recent [`Resolver::resolve`], last mover first.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
    /// Fold every player's best responses into the table, last mover first,
    /// then collapse the first mover's ties to a single equilibrium row.
    pub fn resolve(&mut self, table: Table) -> Table {
        self.stages.clear();
        let root = (0..table.players())
            .rev()
            .fold(table, |table, seat| self.stage(table, seat));
        self.collapse(root)
    }
    /// Reduce a table to the rows where the player at `seat` best responds
    /// to every prefix of earlier positions. All payoff-maximal rows of a
    /// prefix survive. Prefixes absent from the input are simply absent
    /// from the output.
    pub fn stage(&mut self, table: Table, seat: usize) -> Table {
        assert!(seat < table.players(), "seat {} out of range", seat);
        let mut groups = 0;
        let mut ties = 0;
        let mut survivors = Vec::new();
        for group in table.groups(seat) {
            let best = group
                .iter()
                .map(|r| r.payoff.get(seat))
                .fold(Probability::NEG_INFINITY, Probability::max);
            let before = survivors.len();
            survivors.extend(
                group
                    .iter()
                    .filter(|r| r.payoff.get(seat) >= best - TIE_TOLERANCE)
                    .cloned(),
            );
            if survivors.len() - before > 1 {
                ties += 1;
            }
            groups += 1;
        }
        let stage = Stage {
            seat,
            groups,
            rows_in: table.len(),
            rows_out: survivors.len(),
            ties,
        };
        log::debug!("{}", stage);
        self.stages.push(stage);
        Table::from_rows(*table.space(), table.players(), survivors)
    }
    /// Pick one row of a fully resolved table with the tie-break policy.
    /// Empty and single-row tables pass through unchanged.
    pub fn collapse(&mut self, table: Table) -> Table {
        match table.len() {
            0 | 1 => table,
            n => {
                let choice = self.tiebreak.choose(n);
                log::debug!("choosing equilibrium {} of {}", choice + 1, n);
                let row = table.rows()[choice].clone();
                Table::from_rows(*table.space(), table.players(), vec![row])
            }
        }
    }
}
