//! Scene construction and per-tick motion.
//!
//! A `Scene` is built for exactly one grid size and never patched: a resize
//! throws it away and builds a new one.

use std::f64::consts::PI;

use arrayvec::ArrayVec;

use crate::entities::{
    Bird, Butterfly, Cloud, Direction, Flower, GrassClump, Mobile, Rock, Star, Tree,
};
use crate::glyphs::{CloudKind, STAR_TWINKLE};
use crate::placer::{self, Occupancy, MAX_TREES};
use crate::rng::SceneRng;
use crate::terrain::TerrainProfile;
use crate::types::{GardenConfig, GridSize, Variant};

#[derive(Debug, Clone)]
pub struct Scene {
    size: GridSize,
    variant: Variant,
    ground_row: i32,
    seed: u64,
    pub terrain: TerrainProfile,
    pub stars: Vec<Star>,
    pub clouds: Vec<Cloud>,
    pub birds: ArrayVec<Bird, 2>,
    pub trees: ArrayVec<Tree, MAX_TREES>,
    pub flowers: Vec<Flower>,
    pub grass: Vec<GrassClump>,
    pub rocks: Vec<Rock>,
    pub butterflies: ArrayVec<Butterfly, 2>,
    occupancy: Occupancy,
    /// Continues the placement stream; feeds run-time randomness.
    rng: SceneRng,
}

impl Scene {
    #[tracing::instrument(skip(config), fields(variant = config.variant.as_str()))]
    pub fn build(size: GridSize, config: &GardenConfig) -> Self {
        let variant = config.variant;
        let seed = SceneRng::seed_for(size);
        let mut rng = SceneRng::new(seed);
        let (cols, rows) = (size.cols, size.rows);

        let (clouds, stars) = if variant.has_sky() {
            let clouds = Self::spawn_clouds(cols, &mut rng);
            let stars = Self::spawn_stars(cols, rows, &mut rng);
            (clouds, stars)
        } else {
            (Vec::new(), Vec::new())
        };

        let birds = if variant.has_sky() {
            Self::spawn_birds(size)
        } else {
            ArrayVec::new()
        };

        let terrain = TerrainProfile::synthesize(size, variant);
        let ground_row = rows as i32 - 2;

        let mut occupancy = Occupancy::new();
        let trees = placer::place_trees(cols, &mut occupancy);
        let flowers = placer::place_flowers(cols, &mut rng, &mut occupancy);
        let (grass, rocks) = if variant.has_ground_cover() {
            let grass = placer::place_grass(cols, &mut rng, &mut occupancy);
            let rocks = placer::place_rocks(cols, &mut rng, &mut occupancy);
            (grass, rocks)
        } else {
            (Vec::new(), Vec::new())
        };

        let butterflies = if variant.has_butterflies() {
            Self::spawn_butterflies(size, ground_row, &terrain)
        } else {
            ArrayVec::new()
        };

        tracing::debug!(
            seed,
            trees = trees.len(),
            flowers = flowers.len(),
            grass = grass.len(),
            rocks = rocks.len(),
            "scene built"
        );

        Self {
            size,
            variant,
            ground_row,
            seed,
            terrain,
            stars,
            clouds,
            birds,
            trees,
            flowers,
            grass,
            rocks,
            butterflies,
            occupancy,
            rng,
        }
    }

    fn spawn_clouds(cols: u16, rng: &mut SceneRng) -> Vec<Cloud> {
        let count = if cols > 35 { 3 } else { 2 };
        (0..count)
            .map(|i| {
                let x = rng.next_below(cols as usize) as f64;
                let speed = rng.next_in(0.03, 0.04);
                Cloud {
                    x,
                    y: 1 + 2 * i as i32,
                    speed,
                    kind: CloudKind::cycle(i),
                }
            })
            .collect()
    }

    fn spawn_stars(cols: u16, rows: u16, rng: &mut SceneRng) -> Vec<Star> {
        let sky_rows = (rows as f64 * 0.3).floor() as usize;
        let count = (cols as usize * sky_rows / 50).max(3);
        (0..count)
            .map(|_| {
                let x = rng.next_below(cols as usize) as i32;
                let y = rng.next_below(sky_rows) as i32;
                let frame = rng.next_below(STAR_TWINKLE.len()) as f64;
                let rate = rng.next_in(0.015, 0.03);
                Star { x, y, frame, rate }
            })
            .collect()
    }

    fn spawn_birds(size: GridSize) -> ArrayVec<Bird, 2> {
        let (cols, rows) = (size.cols as f64, size.rows as f64);
        let y = (rows * 0.22).floor() as i32;
        ArrayVec::from([
            Bird {
                x: (cols * 0.2).floor(),
                y,
                speed: 0.22,
                frame: 0.0,
                dir: Direction::Right,
            },
            Bird {
                x: (cols * 0.7).floor(),
                y: y + 2,
                speed: 0.18,
                frame: 1.5,
                dir: Direction::Left,
            },
        ])
    }

    /// Butterflies hover a few rows above the average hill top.
    fn spawn_butterflies(
        size: GridSize,
        ground_row: i32,
        terrain: &TerrainProfile,
    ) -> ArrayVec<Butterfly, 2> {
        let cols = size.cols as f64;
        let base = (ground_row - terrain.average().floor() as i32 - 4) as f64;
        ArrayVec::from([
            Butterfly::new((cols * 0.2).floor(), base, 0.1, 0.0, Direction::Right, 0.0),
            Butterfly::new((cols * 0.75).floor(), base + 2.0, 0.08, 2.0, Direction::Left, PI),
        ])
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Row the terrain heights are measured up from.
    pub fn ground_row(&self) -> i32 {
        self.ground_row
    }

    /// Row of the terrain surface at `col` (the ground row outside the grid).
    pub fn surface_row(&self, col: i32) -> i32 {
        self.ground_row - self.terrain.height_at(col) as i32
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The scene one tick later.
    pub fn advance(&self) -> Scene {
        let mut next = self.clone();
        next.step();
        next
    }

    /// Move every mobile entity one tick in place. Terrain and static decor
    /// are left alone.
    pub fn step(&mut self) {
        let size = self.size;
        let rng = &mut self.rng;
        for star in self.stars.iter_mut() {
            *star = star.advance(size, rng);
        }
        for cloud in self.clouds.iter_mut() {
            *cloud = cloud.advance(size, rng);
        }
        for bird in self.birds.iter_mut() {
            *bird = bird.advance(size, rng);
        }
        for bf in self.butterflies.iter_mut() {
            *bf = bf.advance(size, rng);
        }
    }
}
