//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the garden.
//! Everything here is plain data (plus the serde-backed [`GardenConfig`]), so it
//! can be shared by the scene generator, the frame scheduler, and the terminal
//! front end without pulling in any I/O.
//!
//! # Grid Sizing
//!
//! The garden is laid out on a character grid. When the host measures its
//! surface in pixels, the grid size is derived from a fixed per-cell metric:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_WIDTH_PX` | 6.6 | Width of one glyph in display units |
//! | `CELL_HEIGHT_PX` | 15 | Height of one glyph (line height) |
//! | `MIN_COLS` | 20 | Smallest grid width ever produced |
//! | `MIN_ROWS` | 15 | Smallest grid height ever produced |
//!
//! Zero, negative, or non-finite measurements clamp to the minimum size.
//!
//! # Animation Timing
//!
//! - `DEFAULT_FPS`: 8 logical ticks per second (125ms per frame)
//! - `GROUND_SCROLL_RATE`: bottom grass line advances one glyph every 40 ticks
//! - `FLOWER_SWAY_RATE`: phase advance per tick for swaying flowers
//!
//! # Examples
//!
//! ```
//! use ascii_garden_types::{GridSize, Variant};
//!
//! // A 264x300 display region maps to a 40x20 grid.
//! let size = GridSize::from_pixels(264.0, 300.0);
//! assert_eq!(size, GridSize::new(40, 20));
//!
//! // Degenerate measurements clamp to the minimum.
//! assert_eq!(GridSize::from_pixels(0.0, -5.0), GridSize::new(20, 15));
//!
//! assert_eq!(Variant::from_str("footer"), Some(Variant::Footer));
//! ```

mod config;

pub use config::{ConfigError, GardenConfig};

use serde::{Deserialize, Serialize};

/// Display width of one character cell.
pub const CELL_WIDTH_PX: f64 = 6.6;

/// Display height of one character cell.
pub const CELL_HEIGHT_PX: f64 = 15.0;

/// Minimum grid width in columns.
pub const MIN_COLS: u16 = 20;

/// Minimum grid height in rows.
pub const MIN_ROWS: u16 = 15;

/// Smallest height at which every variant's terrain ceiling is at least the
/// 2-row terrain floor. Configured minimums may not go below it.
pub const MIN_TERRAIN_ROWS: u16 = 4;

/// Logical animation rate (ticks per second).
pub const DEFAULT_FPS: f64 = 8.0;

/// Slowest and fastest rates reachable from the keyboard.
pub const MIN_FPS: f64 = 1.0;
pub const MAX_FPS: f64 = 60.0;

/// Bottom grass line scroll rate (glyph steps per tick).
pub const GROUND_SCROLL_RATE: f64 = 0.025;

/// Flower sway phase advance per tick (radians).
pub const FLOWER_SWAY_RATE: f64 = 0.012;

/// Grid dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl GridSize {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Clamp a size expressed in cells to the given minimums.
    ///
    /// Rows never drop below [`MIN_TERRAIN_ROWS`], whatever `min_rows` says.
    pub fn clamped(cols: u16, rows: u16, min_cols: u16, min_rows: u16) -> Self {
        Self {
            cols: cols.max(min_cols),
            rows: rows.max(min_rows).max(MIN_TERRAIN_ROWS),
        }
    }

    /// Convert a measured surface (display units) into a grid using the default
    /// cell metrics and minimums.
    pub fn from_pixels(width_px: f64, height_px: f64) -> Self {
        Self::from_pixels_with(
            width_px,
            height_px,
            CELL_WIDTH_PX,
            CELL_HEIGHT_PX,
            MIN_COLS,
            MIN_ROWS,
        )
    }

    pub fn from_pixels_with(
        width_px: f64,
        height_px: f64,
        cell_w: f64,
        cell_h: f64,
        min_cols: u16,
        min_rows: u16,
    ) -> Self {
        // `as u16` saturates: NaN and negatives become 0, huge values become u16::MAX.
        let cols = (width_px / cell_w).floor() as u16;
        let rows = (height_px / cell_h).floor() as u16;
        Self::clamped(cols, rows, min_cols, min_rows)
    }

    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }
}

/// Presentation variant of the garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Sky and land: clouds, stars, birds, butterflies, trees, flowers.
    #[default]
    Full,
    /// Tall terrain band with trees and flowers only.
    Footer,
    /// Terrain-only landscape with grass clumps, rocks and butterflies.
    Meadow,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Full, Variant::Footer, Variant::Meadow];

    /// Parse variant from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(Variant::Full),
            "footer" => Some(Variant::Footer),
            "meadow" | "terrain" => Some(Variant::Meadow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Footer => "footer",
            Variant::Meadow => "meadow",
        }
    }

    /// The variant after this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Variant::Full => Variant::Footer,
            Variant::Footer => Variant::Meadow,
            Variant::Meadow => Variant::Full,
        }
    }

    /// Fraction of the grid height available to terrain.
    pub fn height_fraction(&self) -> f64 {
        match self {
            Variant::Full => 0.55,
            Variant::Footer => 0.8,
            Variant::Meadow => 0.65,
        }
    }

    /// Baseline offset of the terrain, as a fraction of the max terrain height.
    pub fn baseline_fraction(&self) -> f64 {
        match self {
            Variant::Full => 0.45,
            Variant::Footer => 0.6,
            Variant::Meadow => 0.5,
        }
    }

    /// Clouds, stars and birds.
    pub fn has_sky(&self) -> bool {
        matches!(self, Variant::Full)
    }

    pub fn has_butterflies(&self) -> bool {
        matches!(self, Variant::Full | Variant::Meadow)
    }

    /// Grass clumps and rocks.
    pub fn has_ground_cover(&self) -> bool {
        matches!(self, Variant::Meadow)
    }
}

/// User-level actions understood by the garden runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenAction {
    Quit,
    TogglePause,
    CycleVariant,
    Faster,
    Slower,
}

impl GardenAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GardenAction::Quit => "quit",
            GardenAction::TogglePause => "togglePause",
            GardenAction::CycleVariant => "cycleVariant",
            GardenAction::Faster => "faster",
            GardenAction::Slower => "slower",
        }
    }
}
