//! Animation scheduler for the garden.
//!
//! [`FrameClock`] turns an irregular stream of refresh timestamps into a fixed
//! logical tick rate; [`Garden`] owns the live [`Scene`](ascii_garden_core::Scene)
//! and composes one frame per accepted tick. There is exactly one writer of
//! scene state, and it runs synchronously inside each refresh callback.

pub mod clock;
pub mod garden;

pub use ascii_garden_core as core;
pub use ascii_garden_types as types;

pub use clock::FrameClock;
pub use garden::Garden;
