pub mod r#match;
pub mod utils;

pub use r#match::*;
pub use nalgebra::Vector3;
