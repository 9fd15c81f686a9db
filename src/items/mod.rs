//! Item system: value descriptors, effects, the inventory, and content.

pub mod catalog;
pub mod inventory;
pub mod types;

pub use inventory::*;
pub use types::*;
