pub mod classifier;
pub use classifier::*;

pub mod shape;
pub use shape::*;

pub mod verdict;
pub use verdict::*;
