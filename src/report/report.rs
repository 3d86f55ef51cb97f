use crate::*;
use serde::Serialize;

/// The resolved equilibrium, one [`Standing`] per player in move order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub resolution: usize,
    pub standings: Vec<Standing>,
    #[serde(skip)]
    precision: usize,
}

impl Report {
    /// Read positions and payoffs off the single row left after the first
    /// mover's stage.
    pub fn new(row: &Row, space: &Space) -> Self {
        let standings = row
            .profile
            .ticks()
            .iter()
            .zip(row.payoff.values())
            .enumerate()
            .map(|(seat, (tick, p))| Standing {
                label: Standing::label(seat),
                position: space.coordinate(*tick),
                probability: *p,
            })
            .collect();
        Self {
            resolution: space.resolution(),
            standings,
            precision: DEFAULT_PRECISION,
        }
    }
    /// Decimal places used by the textual form.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }
    pub fn position(&self, seat: usize) -> Coordinate {
        self.standings[seat].position
    }
    pub fn probability(&self, seat: usize) -> Probability {
        self.standings[seat].probability
    }
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<&Table> for Report {
    type Error = anyhow::Error;
    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        match table.rows() {
            [row] => Ok(Self::new(row, table.space())),
            [] => Err(anyhow::anyhow!("no legal profile survived resolution")),
            rows => Err(anyhow::anyhow!(
                "table not fully resolved: {} rows remain",
                rows.len()
            )),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for standing in &self.standings {
            writeln!(f, "{}", standing.render(self.precision))?;
        }
        Ok(())
    }
}
