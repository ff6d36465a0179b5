pub mod ai;
pub mod decision;
pub mod memory;
pub mod processor;
pub mod profile;
pub mod random;
pub mod states;

pub use ai::*;
pub use decision::*;
pub use memory::*;
pub use processor::*;
pub use profile::*;
pub use random::*;
pub use states::*;
