pub mod outcome;
pub mod ride;

pub use outcome::*;
pub use ride::*;
