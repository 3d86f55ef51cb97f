mod payoff;

pub use payoff::*;
