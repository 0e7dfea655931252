//! Core garden module - pure, deterministic, and testable
//!
//! This crate contains the procedural scene generator and the frame compositor.
//! It has **no dependencies** on terminals, clocks, or I/O, which keeps it:
//!
//! - **Deterministic**: the layout is a pure function of the grid size
//! - **Testable**: every tick is an explicit `Scene -> Scene` step
//! - **Portable**: the output is plain text (or a layered [`Grid`]) for any host
//!
//! # Module Structure
//!
//! - [`rng`]: seeded Park-Miller generator
//! - [`terrain`]: layered sine-wave hill profile
//! - [`glyphs`]: shape catalogs and animation frame sequences
//! - [`entities`]: decor and mobile entity state, plus the per-tick step
//! - [`placer`]: occupancy set and decoration placement
//! - [`scene`]: builds a full scene for one grid size
//! - [`grid`]: bounds-checked character grid
//! - [`compose`]: rasterizes a scene at a given tick
//!
//! # Example
//!
//! ```
//! use ascii_garden_core::{Compositor, Scene};
//! use ascii_garden_types::{GardenConfig, GridSize};
//!
//! let config = GardenConfig::default();
//! let scene = Scene::build(GridSize::new(40, 20), &config);
//! let frame = Compositor::from_config(&config).compose(&scene, 1);
//!
//! assert_eq!(frame.to_text().lines().count(), 20);
//!
//! // Motion is applied separately from composition.
//! let next = scene.advance();
//! assert_eq!(next.terrain, scene.terrain);
//! ```

pub mod compose;
pub mod entities;
pub mod glyphs;
pub mod grid;
pub mod placer;
pub mod rng;
pub mod scene;
pub mod terrain;

pub use ascii_garden_types as types;

// Re-export commonly used types for convenience
pub use compose::Compositor;
pub use entities::{Bird, Butterfly, Cloud, Direction, Flower, GrassClump, Mobile, Rock, Star, Tree};
pub use grid::{Grid, GridCell, Layer};
pub use placer::Occupancy;
pub use rng::SceneRng;
pub use scene::Scene;
pub use terrain::{Slope, TerrainProfile};
