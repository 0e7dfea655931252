//! Terminal front end for the garden.
//!
//! A small rendering layer in the spirit of a game renderer: the composed
//! [`Grid`](ascii_garden_core::Grid) is mapped into a framebuffer of styled
//! cells, which is then flushed to the terminal with run-length diffs.
//! No widget or layout library is involved.

pub mod fb;
pub mod garden_view;
pub mod renderer;

pub use ascii_garden_core as core;
pub use ascii_garden_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use garden_view::{GardenView, Palette};
pub use renderer::{encode_diff_into, encode_full_into, TerminalSession};
