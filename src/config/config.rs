use crate::*;

/// Everything that determines a game, before validation.
///
/// ```
/// use hotelling::Config;
/// let config = Config::new(3, 24).pinned(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub players: usize,
    pub resolution: usize,
    /// Externally fixed position of the first mover, if any.
    pub first: Option<Coordinate>,
    /// Restrict an unpinned first mover to the lower half of the space.
    pub mirror: bool,
    /// Decimal places in the textual report.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYERS, DEFAULT_RESOLUTION)
    }
}

impl Config {
    pub fn new(players: usize, resolution: usize) -> Self {
        Self {
            players,
            resolution,
            first: None,
            mirror: true,
            precision: DEFAULT_PRECISION,
        }
    }
    pub fn pinned(mut self, first: Coordinate) -> Self {
        self.first = Some(first);
        self
    }
    pub fn mirrored(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
    /// Same game at a different resolution.
    pub fn at(&self, resolution: usize) -> Self {
        Self {
            resolution,
            ..self.clone()
        }
    }
    /// Fail fast on anything that would make table construction meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seats().map(|_| ())
    }
    /// The discretized space. Requires a valid resolution.
    pub fn space(&self) -> Result<Space, ConfigError> {
        match self.resolution {
            0 => Err(ConfigError::ZeroResolution),
            n if n > MAX_RESOLUTION => Err(ConfigError::ResolutionTooLarge(n)),
            n => Ok(Space::new(n)),
        }
    }
    /// Candidate sets for every player, in move order.
    pub fn seats(&self) -> Result<Vec<Seat>, ConfigError> {
        if self.players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        let space = self.space()?;
        if self.players > space.size() {
            return Err(ConfigError::TooManyPlayers {
                players: self.players,
                points: space.size(),
            });
        }
        let first = match self.first {
            None => None,
            Some(x) if !(0.0..=1.0).contains(&x) => return Err(ConfigError::OutOfRange(x)),
            Some(x) => match space.locate(x) {
                Some(tick) => Some(tick),
                None => {
                    return Err(ConfigError::OffGrid {
                        value: x,
                        resolution: self.resolution,
                    });
                }
            },
        };
        Ok(Seat::lineup(self.players, first, self.mirror))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_too_few_players() {
        assert_eq!(
            Config::new(1, 10).validate(),
            Err(ConfigError::TooFewPlayers(1))
        );
    }

    #[test]
    fn rejects_zero_resolution() {
        assert_eq!(Config::new(3, 0).validate(), Err(ConfigError::ZeroResolution));
    }

    #[test]
    fn rejects_unrepresentable_resolution() {
        let too_fine = MAX_RESOLUTION + 1;
        assert_eq!(
            Config::new(3, too_fine).pinned(1.0).validate(),
            Err(ConfigError::ResolutionTooLarge(too_fine))
        );
        assert_eq!(
            Config::new(3, usize::MAX).validate(),
            Err(ConfigError::ResolutionTooLarge(usize::MAX))
        );
        assert!(Config::new(3, MAX_RESOLUTION).pinned(1.0).validate().is_ok());
    }

    #[test]
    fn rejects_crowded_grid() {
        assert!(matches!(
            Config::new(4, 2).validate(),
            Err(ConfigError::TooManyPlayers { players: 4, points: 3 })
        ));
        assert!(Config::new(3, 2).validate().is_ok());
    }

    #[test]
    fn rejects_off_grid_pin() {
        assert!(matches!(
            Config::new(3, 10).pinned(0.25).validate(),
            Err(ConfigError::OffGrid { resolution: 10, .. })
        ));
        assert!(matches!(
            Config::new(3, 10).pinned(1.5).validate(),
            Err(ConfigError::OutOfRange(_))
        ));
        assert!(Config::new(3, 10).pinned(0.3).validate().is_ok());
    }

    #[test]
    fn pin_overrides_mirror() {
        let seats = Config::new(3, 4).pinned(1.0).seats().expect("valid");
        assert_eq!(seats, vec![Seat::Pinned(Tick::from(4)), Seat::Free, Seat::Free]);
        let seats = Config::new(2, 4).mirrored(false).seats().expect("valid");
        assert_eq!(seats, vec![Seat::Free, Seat::Free]);
    }

    #[test]
    fn errors_render() {
        let text = ConfigError::OffGrid {
            value: 0.25,
            resolution: 10,
        }
        .to_string();
        assert_eq!(text, "first position 0.25 is not a multiple of 1/10");
    }
}
