mod movement;
mod steering;

pub use movement::*;
pub use steering::*;
