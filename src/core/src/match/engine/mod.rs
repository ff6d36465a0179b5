pub mod ball;
pub mod config;
pub mod context;
pub mod engine;
pub mod events;
pub mod field;
pub mod goal;
pub mod player;
pub mod state;

pub use ball::*;
pub use config::*;
pub use context::*;
pub use engine::*;
pub use events::*;
pub use field::*;
pub use goal::*;
pub use player::*;
pub use state::*;
