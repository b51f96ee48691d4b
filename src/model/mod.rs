//! Pure data structures passed between the tracking pipeline and its collaborators.

pub mod command;
pub mod message;
pub mod tracking;

pub use command::*;
pub use message::*;
pub use tracking::*;
