mod report;
mod standing;

pub use report::*;
pub use standing::*;
