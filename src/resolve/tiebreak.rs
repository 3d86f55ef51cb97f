use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// How a player chooses among equally good moves.
///
/// This is the only source of nondeterminism in the solver. Swapping the
/// policy changes which equilibrium is reported, never whether the reported
/// moves are best responses.
pub trait TieBreak {
    /// Index of the chosen candidate among `n >= 1` tied ones.
    fn choose(&mut self, n: usize) -> usize;
}

/// Always the first tied candidate, which in table order is the one with
/// the lowest positions. Reproducible; used by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct First;

impl TieBreak for First {
    fn choose(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        0
    }
}

/// Uniformly random among tied candidates.
#[derive(Debug, Clone)]
pub struct Uniform<R = SmallRng>(R)
where
    R: Rng;

impl Uniform<SmallRng> {
    /// Reproducible stream from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    /// Fresh stream seeded by the operating system.
    pub fn entropy() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl<R> From<R> for Uniform<R>
where
    R: Rng,
{
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl<R> TieBreak for Uniform<R>
where
    R: Rng,
{
    fn choose(&mut self, n: usize) -> usize {
        match n {
            0 => panic!("nothing to choose from"),
            1 => 0,
            n => self.0.random_range(0..n),
        }
    }
}

impl TieBreak for Box<dyn TieBreak> {
    fn choose(&mut self, n: usize) -> usize {
        (**self).choose(n)
    }
}
