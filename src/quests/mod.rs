//! Quest system: the state machine, the registry, and content.

pub mod catalog;
pub mod manager;
pub mod types;

pub use manager::*;
pub use types::*;
