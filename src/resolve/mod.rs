mod resolver;
mod stage;
mod tiebreak;

pub use resolver::*;
pub use stage::*;
pub use tiebreak::*;
