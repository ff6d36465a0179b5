pub mod behaviours;
pub mod capabilities;
pub mod player;
pub mod skills;
pub mod state;
pub mod strategies;

pub use behaviours::*;
pub use capabilities::*;
pub use player::*;
pub use skills::*;
pub use state::*;
pub use strategies::*;
