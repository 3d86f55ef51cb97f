use crate::*;

/// A strategy profile paired with the payoff it earns each player.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub profile: Profile,
    pub payoff: Payoff,
}

impl Row {
    pub fn new(profile: Profile, space: &Space) -> Self {
        assert!(profile.is_distinct(), "colliding positions in {}", profile);
        let payoff = Payoff::of(&profile, space);
        Self { profile, payoff }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.profile, self.payoff)
    }
}
