/// Index of a grid point i/N in a discretized [`crate::Space`].
///
/// Ticks carry no resolution of their own, so ordering and equality are
/// exact integer comparisons. Convert to a [`crate::Coordinate`] through
/// the owning space.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Tick(u32);

impl Tick {
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for Tick {
    fn from(i: usize) -> Self {
        Self(u32::try_from(i).expect("tick index fits in u32"))
    }
}

impl From<Tick> for usize {
    fn from(tick: Tick) -> Self {
        tick.index()
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
