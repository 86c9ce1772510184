pub mod candidate;
pub use candidate::*;

pub mod requirement;
pub use requirement::*;

#[allow(clippy::module_inception)]
pub mod search;
pub use search::*;
