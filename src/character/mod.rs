//! Characters: combat stats and the player aggregate.

pub mod player;
pub mod stats;

pub use player::*;
pub use stats::*;
