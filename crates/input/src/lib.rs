//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GardenAction`]. The garden
//! has no continuous controls, so there is no repeat handling: one press is
//! one action.

pub mod map;

pub use ascii_garden_types as types;

pub use map::{map_key, should_quit};
