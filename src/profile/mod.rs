mod profile;
mod profiles;
mod seat;

pub use profile::*;
pub use profiles::*;
pub use seat::*;
