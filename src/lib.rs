//! ASCII garden (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `ascii_garden::{core,engine,input,term,types}` and hosts
//! the terminal binary.

pub use ascii_garden_core as core;
pub use ascii_garden_engine as engine;
pub use ascii_garden_input as input;
pub use ascii_garden_term as term;
pub use ascii_garden_types as types;
