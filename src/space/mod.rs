mod space;
mod tick;

pub use space::*;
pub use tick::*;
