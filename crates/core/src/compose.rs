//! Frame compositor: rasterizes a [`Scene`] at a given tick.
//!
//! Composition is a pure function of `(scene, tick)`. Passes run back to
//! front and later passes overwrite earlier ones, except where a pass
//! explicitly checks what is already in a cell (terrain fill, flowers, and
//! the bottom grass line only take cells that are still free).

use crate::glyphs::{GROUND_GRASS, LEFT_LEAF, RIGHT_LEAF, STEM};
use crate::grid::{Grid, GridCell, Layer};
use crate::scene::Scene;
use crate::terrain::Slope;
use crate::types::{GardenConfig, FLOWER_SWAY_RATE, GROUND_SCROLL_RATE};

/// Surface glyph for a flat column, keyed on the column index.
pub fn surface_texture(col: usize) -> char {
    if col % 4 == 0 {
        '\''
    } else if col % 3 == 0 {
        '.'
    } else {
        '~'
    }
}

/// Sparse hill interior texture, stable for a given `(col, row)`.
pub fn fill_texture(col: usize, row: usize) -> Option<char> {
    match (col * 31 + row * 17) % 23 {
        0 => Some('.'),
        5 => Some(':'),
        11 => Some('\''),
        15 => Some(','),
        _ => None,
    }
}

/// Bottom grass line glyph at `col` for `tick`.
pub fn ground_texture(col: usize, tick: u64, rate: f64) -> char {
    let shift = (tick as f64 * rate).floor() as usize;
    GROUND_GRASS[(col + shift) % GROUND_GRASS.len()]
}

/// Flowers may only land on free cells, hill fill, or flat surface texture.
/// Slope glyphs keep the hill outline intact.
fn is_soft(cell: GridCell) -> bool {
    match cell.layer {
        Layer::Empty | Layer::Fill => true,
        Layer::Surface => !matches!(cell.glyph, '/' | '\\'),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compositor {
    pub sway_rate: f64,
    pub ground_scroll_rate: f64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self {
            sway_rate: FLOWER_SWAY_RATE,
            ground_scroll_rate: GROUND_SCROLL_RATE,
        }
    }
}

impl Compositor {
    pub fn from_config(config: &GardenConfig) -> Self {
        Self {
            sway_rate: config.sway_rate,
            ground_scroll_rate: config.ground_scroll_rate,
        }
    }

    pub fn compose(&self, scene: &Scene, tick: u64) -> Grid {
        let mut grid = Grid::new(scene.size());
        self.compose_into(scene, tick, &mut grid);
        grid
    }

    /// Compose into an existing grid, reallocating only if the size differs.
    pub fn compose_into(&self, scene: &Scene, tick: u64, grid: &mut Grid) {
        if grid.size() != scene.size() {
            *grid = Grid::new(scene.size());
        } else {
            grid.clear();
        }

        paint_stars(scene, grid);
        paint_clouds(scene, grid);
        paint_birds(scene, grid);
        paint_terrain(scene, grid);
        paint_trees(scene, grid);
        self.paint_flowers(scene, tick, grid);
        paint_ground_cover(scene, grid);
        paint_butterflies(scene, grid);
        self.paint_ground_line(tick, grid);
    }

    fn paint_flowers(&self, scene: &Scene, tick: u64, grid: &mut Grid) {
        for flower in &scene.flowers {
            let base = scene.surface_row(flower.x);
            let head_row = base - flower.height as i32;
            let head_col = flower.x + flower.sway(tick, self.sway_rate);

            grid.set_if(head_row, head_col, flower.head.glyph(), Layer::Decor, is_soft);
            if flower.height >= 2 {
                grid.set_if(head_row + 1, flower.x - 1, LEFT_LEAF, Layer::Decor, is_soft);
                grid.set_if(head_row + 1, flower.x + 1, RIGHT_LEAF, Layer::Decor, is_soft);
            }
            for row in head_row + 1..base {
                grid.set_if(row, flower.x, STEM, Layer::Decor, is_soft);
            }
        }
    }

    fn paint_ground_line(&self, tick: u64, grid: &mut Grid) {
        let last = grid.rows() as i32 - 1;
        for col in 0..grid.cols() as usize {
            let glyph = ground_texture(col, tick, self.ground_scroll_rate);
            grid.set_if(last, col as i32, glyph, Layer::Ground, |c| c.is_blank());
        }
    }
}

fn paint_stars(scene: &Scene, grid: &mut Grid) {
    for star in &scene.stars {
        let glyph = star.glyph();
        if glyph != ' ' {
            grid.set(star.y, star.x, glyph, Layer::Sky);
        }
    }
}

fn paint_clouds(scene: &Scene, grid: &mut Grid) {
    for cloud in &scene.clouds {
        grid.stamp_shape(cloud.y, cloud.x.floor() as i32, cloud.kind.shape(), Layer::Sky);
    }
}

fn paint_birds(scene: &Scene, grid: &mut Grid) {
    for bird in &scene.birds {
        grid.stamp(bird.y, bird.x.floor() as i32, bird.glyph(), Layer::Sky);
    }
}

fn paint_terrain(scene: &Scene, grid: &mut Grid) {
    let ground = scene.ground_row();
    for (col, &height) in scene.terrain.heights().iter().enumerate() {
        let surface = ground - height as i32;
        let glyph = match scene.terrain.slope_at(col) {
            Slope::Rising => '/',
            Slope::Falling => '\\',
            Slope::Flat => surface_texture(col),
        };
        grid.set(surface, col as i32, glyph, Layer::Surface);

        for row in (surface + 1).max(0)..ground {
            if let Some(glyph) = fill_texture(col, row as usize) {
                grid.set_if(row, col as i32, glyph, Layer::Fill, |c| c.is_blank());
            }
        }
    }
}

/// Trees stand on the surface under their trunk column.
fn paint_trees(scene: &Scene, grid: &mut Grid) {
    for tree in &scene.trees {
        let shape = tree.kind.shape();
        let top = scene.surface_row(tree.anchor()) - shape.len() as i32;
        grid.stamp_shape(top, tree.x, shape, Layer::Decor);
    }
}

fn paint_ground_cover(scene: &Scene, grid: &mut Grid) {
    let grass = scene.grass.iter().map(|g| (g.x, g.anchor(), g.kind.shape()));
    let rocks = scene.rocks.iter().map(|r| (r.x, r.anchor(), r.kind.shape()));
    for (x, anchor, shape) in grass.chain(rocks) {
        let top = scene.surface_row(anchor) - shape.len() as i32;
        grid.stamp_shape(top, x, shape, Layer::Decor);
    }
}

fn paint_butterflies(scene: &Scene, grid: &mut Grid) {
    for bf in &scene.butterflies {
        grid.stamp(
            bf.y.floor() as i32,
            bf.x.floor() as i32,
            bf.glyph(),
            Layer::Critter,
        );
    }
}
