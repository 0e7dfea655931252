//! Terrain synthesizer: rolling hills from three layered sine waves.
//!
//! The profile depends only on the column index and fixed constants, never on
//! the RNG, so the same grid size always produces the same silhouette.

use std::f64::consts::PI;

use crate::types::{GridSize, Variant};

/// Lowest height any column may have.
pub const MIN_TERRAIN_HEIGHT: u16 = 2;

/// (frequency across the width in half-turns, phase, amplitude fraction)
const WAVES: [(f64, f64, f64); 3] = [(2.5, 0.5, 0.35), (5.0, 1.2, 0.20), (11.0, 3.0, 0.08)];

/// Surface orientation of one column relative to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    /// Higher than the left neighbour by more than one row.
    Rising,
    /// Higher than the right neighbour by more than one row.
    Falling,
    Flat,
}

/// Per-column terrain heights (rows above the ground row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainProfile {
    heights: Vec<u16>,
    max_height: u16,
}

impl TerrainProfile {
    pub fn synthesize(size: GridSize, variant: Variant) -> Self {
        let cols = size.cols as usize;
        let max_height = Self::max_height_for(size.rows, variant);
        let max = max_height as f64;
        let baseline = max * variant.baseline_fraction();

        let heights = (0..cols)
            .map(|c| {
                let t = c as f64 / cols as f64;
                let h = WAVES
                    .iter()
                    .map(|&(freq, phase, amp)| (t * PI * freq + phase).sin() * max * amp)
                    .sum::<f64>()
                    + baseline;
                // Upper bound first so the floor of 2 always wins.
                (h.round().min(max) as i64).max(MIN_TERRAIN_HEIGHT as i64) as u16
            })
            .collect();

        Self {
            heights,
            max_height,
        }
    }

    /// `floor(rows * height_fraction)` for the variant.
    pub fn max_height_for(rows: u16, variant: Variant) -> u16 {
        (rows as f64 * variant.height_fraction()).floor() as u16
    }

    pub fn heights(&self) -> &[u16] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn max_height(&self) -> u16 {
        self.max_height
    }

    /// Height at a column; 0 outside the profile.
    pub fn height_at(&self, col: i32) -> u16 {
        usize::try_from(col)
            .ok()
            .and_then(|c| self.heights.get(c).copied())
            .unwrap_or(0)
    }

    pub fn slope_at(&self, col: usize) -> Slope {
        let Some(&h) = self.heights.get(col) else {
            return Slope::Flat;
        };
        let left = if col > 0 { self.heights[col - 1] } else { h };
        let right = self.heights.get(col + 1).copied().unwrap_or(h);

        if h > left + 1 {
            Slope::Rising
        } else if h > right + 1 {
            Slope::Falling
        } else {
            Slope::Flat
        }
    }

    pub fn average(&self) -> f64 {
        if self.heights.is_empty() {
            return 0.0;
        }
        self.heights.iter().map(|&h| h as f64).sum::<f64>() / self.heights.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_spans_every_column() {
        let t = TerrainProfile::synthesize(GridSize::new(40, 20), Variant::Full);
        assert_eq!(t.len(), 40);
        assert_eq!(t.max_height(), 11);
    }

    #[test]
    fn heights_are_clamped() {
        for variant in Variant::ALL {
            for (cols, rows) in [(20, 15), (40, 20), (97, 33), (200, 60)] {
                let t = TerrainProfile::synthesize(GridSize::new(cols, rows), variant);
                let max = TerrainProfile::max_height_for(rows, variant);
                for &h in t.heights() {
                    assert!(h >= MIN_TERRAIN_HEIGHT && h <= max, "h={h} max={max}");
                }
            }
        }
    }

    #[test]
    fn smallest_grid_keeps_ceiling_above_floor() {
        for variant in Variant::ALL {
            let rows = crate::types::MIN_TERRAIN_ROWS;
            let max = TerrainProfile::max_height_for(rows, variant);
            assert!(max >= MIN_TERRAIN_HEIGHT, "{variant:?}: max={max}");
            let t = TerrainProfile::synthesize(GridSize::new(40, rows), variant);
            assert!(t.heights().iter().all(|&h| h <= max));
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = TerrainProfile::synthesize(GridSize::new(64, 24), Variant::Footer);
        let b = TerrainProfile::synthesize(GridSize::new(64, 24), Variant::Footer);
        assert_eq!(a, b);
    }

    #[test]
    fn slope_classification() {
        let t = TerrainProfile {
            heights: vec![2, 5, 5, 2, 3],
            max_height: 8,
        };
        assert_eq!(t.slope_at(0), Slope::Flat);
        assert_eq!(t.slope_at(1), Slope::Rising);
        assert_eq!(t.slope_at(2), Slope::Falling);
        assert_eq!(t.slope_at(3), Slope::Flat);
        assert_eq!(t.slope_at(4), Slope::Flat);
        assert_eq!(t.slope_at(99), Slope::Flat);
    }

    #[test]
    fn height_outside_profile_is_zero() {
        let t = TerrainProfile::synthesize(GridSize::new(20, 15), Variant::Full);
        assert_eq!(t.height_at(-1), 0);
        assert_eq!(t.height_at(20), 0);
        assert!(t.height_at(0) >= MIN_TERRAIN_HEIGHT);
    }

    #[test]
    fn average_lies_within_bounds() {
        let t = TerrainProfile::synthesize(GridSize::new(80, 30), Variant::Full);
        let avg = t.average();
        assert!(avg >= MIN_TERRAIN_HEIGHT as f64 && avg <= t.max_height() as f64);
    }
}
