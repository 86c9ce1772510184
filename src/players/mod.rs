pub mod brain;
pub use brain::*;

pub mod json;
pub use json::*;

pub mod robot;
pub use robot::*;

pub mod script;
pub use script::*;

#[cfg(feature = "cli")]
pub mod console;
#[cfg(feature = "cli")]
pub use console::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;
