//! Garden configuration (JSON file + defaults).

use serde::{Deserialize, Serialize};

use crate::{
    GridSize, Variant, CELL_HEIGHT_PX, CELL_WIDTH_PX, DEFAULT_FPS, FLOWER_SWAY_RATE,
    GROUND_SCROLL_RATE, MIN_COLS, MIN_ROWS, MIN_TERRAIN_ROWS,
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("fps must be a positive finite number, got {0}")]
    InvalidFps(f64),

    #[error("cell size must be positive, got {width}x{height}")]
    InvalidCellSize { width: f64, height: f64 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("minimum grid size must be at least 1x4, got {cols}x{rows}")]
    InvalidMinimum { cols: u16, rows: u16 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime configuration for a garden.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GardenConfig {
    pub variant: Variant,
    /// Logical ticks per second.
    pub fps: f64,
    pub ground_scroll_rate: f64,
    pub sway_rate: f64,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
    pub min_cols: u16,
    pub min_rows: u16,
    /// Render every layer in the same dim colour.
    pub monochrome: bool,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Full,
            fps: DEFAULT_FPS,
            ground_scroll_rate: GROUND_SCROLL_RATE,
            sway_rate: FLOWER_SWAY_RATE,
            cell_width_px: CELL_WIDTH_PX,
            cell_height_px: CELL_HEIGHT_PX,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
            monochrome: false,
        }
    }
}

impl GardenConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GardenConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        if !(self.cell_width_px > 0.0 && self.cell_height_px > 0.0) {
            return Err(ConfigError::InvalidCellSize {
                width: self.cell_width_px,
                height: self.cell_height_px,
            });
        }
        for (name, value) in [
            ("groundScrollRate", self.ground_scroll_rate),
            ("swayRate", self.sway_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        if self.min_cols == 0 || self.min_rows < MIN_TERRAIN_ROWS {
            return Err(ConfigError::InvalidMinimum {
                cols: self.min_cols,
                rows: self.min_rows,
            });
        }
        Ok(())
    }

    /// Milliseconds between accepted frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps
    }

    /// Grid size for a surface measured in display units.
    pub fn measure(&self, width_px: f64, height_px: f64) -> GridSize {
        GridSize::from_pixels_with(
            width_px,
            height_px,
            self.cell_width_px,
            self.cell_height_px,
            self.min_cols,
            self.min_rows,
        )
    }

    /// Grid size for a surface already measured in cells (e.g. a terminal).
    pub fn fit_cells(&self, cols: u16, rows: u16) -> GridSize {
        GridSize::clamped(cols, rows, self.min_cols, self.min_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = GardenConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.frame_interval_ms(), 125.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GardenConfig::from_json_str(r#"{ "variant": "meadow", "fps": 12 }"#).unwrap();
        assert_eq!(cfg.variant, Variant::Meadow);
        assert_eq!(cfg.fps, 12.0);
        assert_eq!(cfg.min_cols, MIN_COLS);
        assert_eq!(cfg.sway_rate, FLOWER_SWAY_RATE);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GardenConfig::from_json_str(r#"{ "fps": 0 }"#),
            Err(ConfigError::InvalidFps(_))
        ));
        assert!(matches!(
            GardenConfig::from_json_str(r#"{ "cellWidthPx": -1 }"#),
            Err(ConfigError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            GardenConfig::from_json_str(r#"{ "swayRate": -0.5 }"#),
            Err(ConfigError::InvalidRate { name: "swayRate", .. })
        ));
        assert!(matches!(
            GardenConfig::from_json_str(r#"{ "minRows": 0 }"#),
            Err(ConfigError::InvalidMinimum { .. })
        ));
    }

    #[test]
    fn min_rows_must_leave_room_for_terrain() {
        assert!(matches!(
            GardenConfig::from_json_str(r#"{ "minRows": 3 }"#),
            Err(ConfigError::InvalidMinimum { cols: 20, rows: 3 })
        ));
        let cfg = GardenConfig::from_json_str(r#"{ "minRows": 4 }"#).unwrap();
        assert_eq!(cfg.fit_cells(40, 1), GridSize::new(40, 4));
    }

    #[test]
    fn clamping_never_goes_below_terrain_rows() {
        assert_eq!(GridSize::clamped(40, 2, 1, 1), GridSize::new(40, MIN_TERRAIN_ROWS));
        assert_eq!(
            GridSize::from_pixels_with(400.0, 0.0, 10.0, 20.0, 1, 0).rows,
            MIN_TERRAIN_ROWS
        );
    }

    #[test]
    fn rejects_unknown_keys_and_bad_json() {
        assert!(matches!(
            GardenConfig::from_json_str(r#"{ "colour": "green" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GardenConfig::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn error_display_is_stable() {
        let err = ConfigError::InvalidFps(-2.0);
        assert!(err.to_string().contains("fps must be"));
    }

    #[test]
    fn measure_uses_configured_metrics() {
        let cfg = GardenConfig {
            cell_width_px: 10.0,
            cell_height_px: 20.0,
            ..GardenConfig::default()
        };
        assert_eq!(cfg.measure(400.0, 400.0), GridSize::new(40, 20));
        assert_eq!(cfg.fit_cells(3, 3), GridSize::new(MIN_COLS, MIN_ROWS));
    }
}
