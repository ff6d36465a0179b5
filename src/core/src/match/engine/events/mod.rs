pub mod dispatcher;
pub mod models;

pub use dispatcher::*;
pub use models::*;
