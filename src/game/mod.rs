mod hotelling;

pub use hotelling::*;
