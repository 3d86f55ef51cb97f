use crate::*;

/// A validated game: the space, every player's candidate set, and the
/// report precision.
///
/// Solving runs the whole pipeline once: enumerate profiles, score them into
/// the full table, fold best responses from the last mover to the first, and
/// read the surviving row into a [`Report`].
#[derive(Debug, Clone)]
pub struct Hotelling {
    space: Space,
    seats: Vec<Seat>,
    precision: usize,
}

impl TryFrom<&Config> for Hotelling {
    type Error = ConfigError;
    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        Ok(Self {
            seats: config.seats()?,
            space: config.space()?,
            precision: config.precision,
        })
    }
}

impl Hotelling {
    pub fn space(&self) -> &Space {
        &self.space
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn players(&self) -> usize {
        self.seats.len()
    }
    /// Score every legal profile.
    pub fn table(&self) -> Table {
        log::info!(
            "enumerating {} players over {} ({})",
            self.players(),
            self.space,
            self.seats[0]
        );
        let table = Table::build(&self.space, &self.seats);
        log::info!("payoff table holds {} rows", table.len());
        table
    }
    /// Resolve the game with an existing resolver, keeping its tie-break
    /// stream and stage statistics.
    pub fn solve_with<B>(&self, resolver: &mut Resolver<B>) -> anyhow::Result<Report>
    where
        B: TieBreak,
    {
        let root = resolver.resolve(self.table());
        let report = Report::try_from(&root)?.with_precision(self.precision);
        log::info!("resolved {} stages", resolver.stages().len());
        Ok(report)
    }
    /// Resolve the game under the given tie-break policy.
    pub fn solve<B>(&self, tiebreak: B) -> anyhow::Result<Report>
    where
        B: TieBreak,
    {
        self.solve_with(&mut Resolver::new(tiebreak))
    }
    /// Validate a configuration and solve it.
    pub fn equilibrium<B>(config: &Config, tiebreak: B) -> anyhow::Result<Report>
    where
        B: TieBreak,
    {
        Self::try_from(config)?.solve(tiebreak)
    }
    /// Solve the same game at each resolution in turn, sharing one
    /// tie-break stream. Every resolution is validated before any table is
    /// built.
    pub fn sweep<B>(
        config: &Config,
        resolutions: &[usize],
        tiebreak: B,
    ) -> anyhow::Result<Vec<Report>>
    where
        B: TieBreak,
    {
        let games = resolutions
            .iter()
            .map(|n| Self::try_from(&config.at(*n)))
            .collect::<Result<Vec<_>, _>>()?;
        let mut resolver = Resolver::new(tiebreak);
        games
            .iter()
            .inspect(|g| log::info!("solving at resolution {}", g.space.resolution()))
            .map(|g| g.solve_with(&mut resolver))
            .collect()
    }
}
