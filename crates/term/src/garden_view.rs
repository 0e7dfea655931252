//! GardenView: maps a composed [`Grid`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Grid, Layer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Foreground colour per compositing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: CellStyle,
    pub sky: CellStyle,
    pub surface: CellStyle,
    pub fill: CellStyle,
    pub decor: CellStyle,
    pub critter: CellStyle,
    pub ground: CellStyle,
    pub status: CellStyle,
}

impl Palette {
    pub fn colour() -> Self {
        Self {
            empty: CellStyle::fg(Rgb::grey(0)),
            sky: CellStyle::fg(Rgb::new(150, 160, 190)),
            surface: CellStyle::fg(Rgb::new(120, 150, 90)),
            fill: CellStyle {
                dim: true,
                ..CellStyle::fg(Rgb::new(80, 100, 60))
            },
            decor: CellStyle::fg(Rgb::new(90, 165, 95)),
            critter: CellStyle::fg(Rgb::new(215, 175, 95)),
            ground: CellStyle::fg(Rgb::new(100, 140, 70)),
            status: CellStyle {
                bold: true,
                ..CellStyle::default()
            },
        }
    }

    /// Every layer in one faint grey, like white at 18% opacity on black.
    pub fn monochrome() -> Self {
        let faint = CellStyle::fg(Rgb::grey(46));
        Self {
            empty: faint,
            sky: faint,
            surface: faint,
            fill: faint,
            decor: faint,
            critter: faint,
            ground: faint,
            status: CellStyle::fg(Rgb::grey(160)),
        }
    }

    pub fn style_for(&self, layer: Layer) -> CellStyle {
        match layer {
            Layer::Empty => self.empty,
            Layer::Sky => self.sky,
            Layer::Surface => self.surface,
            Layer::Fill => self.fill,
            Layer::Decor => self.decor,
            Layer::Critter => self.critter,
            Layer::Ground => self.ground,
        }
    }
}

pub struct GardenView {
    palette: Palette,
}

impl Default for GardenView {
    fn default() -> Self {
        Self {
            palette: Palette::colour(),
        }
    }
}

impl GardenView {
    pub fn new(monochrome: bool) -> Self {
        Self::with_palette(if monochrome {
            Palette::monochrome()
        } else {
            Palette::colour()
        })
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn render(&self, grid: &Grid, status: Option<&str>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(grid.cols(), grid.rows());
        self.render_into(grid, status, &mut fb);
        fb
    }

    /// Render into `fb`, resizing it to the grid. `status` is drawn over the
    /// top-left corner.
    pub fn render_into(&self, grid: &Grid, status: Option<&str>, fb: &mut FrameBuffer) {
        fb.resize(grid.cols(), grid.rows());
        for y in 0..grid.rows() {
            for col in 0..grid.cols() {
                if let Some(cell) = grid.get(y as i32, col as i32) {
                    let style = self.palette.style_for(cell.layer);
                    fb.set(col, y, style.cell(cell.glyph));
                }
            }
        }
        if let Some(text) = status {
            fb.put_str(1, 0, &format!(" {text} "), self.palette.status);
        }
    }
}
