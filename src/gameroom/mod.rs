pub mod engine;
pub use engine::*;

pub mod gate;
pub use gate::*;

pub mod reader;
pub use reader::*;

pub mod snapshot;
pub use snapshot::*;

pub mod writer;
pub use writer::*;
