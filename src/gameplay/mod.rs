pub mod auction;
pub use auction::*;

pub mod board;
pub use board::*;

pub mod outcome;
pub use outcome::*;

pub mod phase;
pub use phase::*;

pub mod play;
pub use play::*;

pub mod proposal;
pub use proposal::*;

pub mod role;
pub use role::*;

pub mod seat;
pub use seat::*;

pub mod settlement;
pub use settlement::*;

pub mod stack;
pub use stack::*;
