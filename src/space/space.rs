use crate::*;

/// The finite candidate set { i/N : i = 0..=N } shared by every player.
///
/// A space is fully described by its resolution N. Every position a player
/// can hold is a [`Tick`] in `0..=N`; the coordinate i/N is derived on demand
/// so the grid never drifts through accumulated floating-point error.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Space {
    resolution: usize,
}

impl Space {
    pub fn new(resolution: usize) -> Self {
        assert!(resolution > 0, "space needs at least one interval");
        assert!(resolution <= MAX_RESOLUTION, "resolution {} too fine", resolution);
        Self { resolution }
    }
    /// N, the number of equal intervals [0,1] is cut into.
    pub const fn resolution(&self) -> usize {
        self.resolution
    }
    /// Number of grid points, N + 1.
    pub const fn size(&self) -> usize {
        self.resolution + 1
    }
    /// Width of one interval, 1/N.
    pub fn step(&self) -> Coordinate {
        1.0 / self.resolution as Coordinate
    }
    /// The tick at 0.0.
    pub fn lo(&self) -> Tick {
        Tick::from(0)
    }
    /// The tick at 1.0.
    pub fn hi(&self) -> Tick {
        Tick::from(self.resolution)
    }
    /// All grid points in increasing order.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + Clone + use<> {
        (0..=self.resolution).map(Tick::from)
    }
    /// Grid points on the left half, i/N <= 0.5.
    pub fn lower_half(&self) -> impl Iterator<Item = Tick> + Clone + use<> {
        (0..=self.resolution / 2).map(Tick::from)
    }
    pub fn contains(&self, tick: Tick) -> bool {
        tick.index() <= self.resolution
    }
    /// The coordinate i/N of a tick.
    pub fn coordinate(&self, tick: Tick) -> Coordinate {
        tick.index() as Coordinate / self.resolution as Coordinate
    }
    /// The tick reflected through the midpoint, i -> N - i.
    pub fn mirror(&self, tick: Tick) -> Tick {
        Tick::from(self.resolution - tick.index())
    }
    /// Snap a coordinate onto the grid, if it lies on it.
    pub fn locate(&self, x: Coordinate) -> Option<Tick> {
        if !(0.0..=1.0).contains(&x) {
            return None;
        }
        let scaled = x * self.resolution as Coordinate;
        let nearest = scaled.round();
        match (scaled - nearest).abs() <= GRID_TOLERANCE * self.resolution as Coordinate {
            true => Some(Tick::from(nearest as usize)),
            false => None,
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ i/{} : i = 0..={} }}", self.resolution, self.resolution)
    }
}
