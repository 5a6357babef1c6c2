pub mod circuit;
pub mod equipment;
pub mod phase;
pub mod project;

pub use circuit::*;
pub use equipment::*;
pub use phase::*;
pub use project::*;
