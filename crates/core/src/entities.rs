//! Scene entities.
//!
//! Static decor only stores its column; its row is derived from the terrain at
//! render time. Mobile entities carry continuous position and animation
//! counters and move through [`Mobile::advance`], which returns the next state
//! instead of mutating in place.

use std::f64::consts::PI;

use crate::glyphs::{
    frame_at, CloudKind, FlowerHead, GrassKind, RockKind, TreeKind, BIRD_FRAMES,
    BUTTERFLY_FRAMES, STAR_TWINKLE,
};
use crate::rng::SceneRng;
use crate::types::GridSize;

/// One simulation step for an entity that moves.
pub trait Mobile: Sized {
    fn advance(&self, size: GridSize, rng: &mut SceneRng) -> Self;
}

/// Horizontal travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub frame: f64,
    pub rate: f64,
}

impl Star {
    pub fn glyph(&self) -> char {
        STAR_TWINKLE[frame_at(self.frame, STAR_TWINKLE.len())]
    }
}

impl Mobile for Star {
    fn advance(&self, _size: GridSize, _rng: &mut SceneRng) -> Self {
        Self {
            frame: self.frame + self.rate,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: i32,
    pub speed: f64,
    pub kind: CloudKind,
}

impl Cloud {
    /// Right edge past which a cloud re-enters on the left.
    pub const EXIT_MARGIN: f64 = 3.0;
}

impl Mobile for Cloud {
    fn advance(&self, size: GridSize, _rng: &mut SceneRng) -> Self {
        let mut x = self.x + self.speed;
        if x > size.cols as f64 + Self::EXIT_MARGIN {
            x = -(self.kind.width() as f64) - Self::EXIT_MARGIN;
        }
        Self { x, ..self.clone() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: i32,
    pub speed: f64,
    pub frame: f64,
    pub dir: Direction,
}

impl Bird {
    pub const WRAP_MARGIN: f64 = 5.0;
    pub const FLAP_RATE: f64 = 0.05;

    pub fn glyph(&self) -> &'static str {
        BIRD_FRAMES[frame_at(self.frame, BIRD_FRAMES.len())]
    }

    /// First row of the band birds re-enter in.
    pub fn reentry_top(rows: u16) -> i32 {
        (rows as f64 * 0.18).floor() as i32
    }

    /// Height of the re-entry band (may be 0 on tiny grids).
    pub fn reentry_span(rows: u16) -> usize {
        (rows as f64 * 0.1).floor() as usize
    }

    pub fn reentry_row(rows: u16, rng: &mut SceneRng) -> i32 {
        Self::reentry_top(rows) + rng.next_below(Self::reentry_span(rows)) as i32
    }
}

impl Mobile for Bird {
    fn advance(&self, size: GridSize, rng: &mut SceneRng) -> Self {
        let mut next = Self {
            x: self.x + self.speed * self.dir.sign(),
            frame: self.frame + Self::FLAP_RATE,
            ..self.clone()
        };
        let cols = size.cols as f64;
        let wrapped = match self.dir {
            Direction::Right if next.x > cols + Self::WRAP_MARGIN => {
                next.x = -Self::WRAP_MARGIN;
                true
            }
            Direction::Left if next.x < -Self::WRAP_MARGIN => {
                next.x = cols + Self::WRAP_MARGIN;
                true
            }
            _ => false,
        };
        if wrapped {
            next.y = Self::reentry_row(size.rows, rng);
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Butterfly {
    pub x: f64,
    pub y: f64,
    pub base_y: f64,
    pub speed: f64,
    pub frame: f64,
    pub dir: Direction,
    pub zig_phase: f64,
}

impl Butterfly {
    pub const WRAP_MARGIN: f64 = 3.0;
    pub const FLUTTER_RATE: f64 = 0.08;
    pub const ZIG_RATE: f64 = 0.04;
    pub const ZIG_AMPLITUDE: f64 = 2.0;

    pub fn new(x: f64, base_y: f64, speed: f64, frame: f64, dir: Direction, zig_phase: f64) -> Self {
        Self {
            x,
            y: base_y,
            base_y,
            speed,
            frame,
            dir,
            zig_phase,
        }
    }

    pub fn glyph(&self) -> &'static str {
        BUTTERFLY_FRAMES[frame_at(self.frame, BUTTERFLY_FRAMES.len())]
    }
}

impl Mobile for Butterfly {
    fn advance(&self, size: GridSize, _rng: &mut SceneRng) -> Self {
        let zig_phase = self.zig_phase + Self::ZIG_RATE;
        let mut x = self.x + self.speed * self.dir.sign();
        let cols = size.cols as f64;
        match self.dir {
            Direction::Right if x > cols + Self::WRAP_MARGIN => x = -Self::WRAP_MARGIN,
            Direction::Left if x < -Self::WRAP_MARGIN => x = cols + Self::WRAP_MARGIN,
            _ => {}
        }
        Self {
            x,
            y: self.base_y + zig_phase.sin() * Self::ZIG_AMPLITUDE,
            frame: self.frame + Self::FLUTTER_RATE,
            zig_phase,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// Left edge of the template.
    pub x: i32,
    pub kind: TreeKind,
}

impl Tree {
    pub fn anchor(&self) -> i32 {
        self.x + TreeKind::TRUNK_OFFSET
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    pub x: i32,
    /// Stem height in rows (1 or 2).
    pub height: u8,
    pub head: FlowerHead,
    pub phase: f64,
}

impl Flower {
    pub const SWAY_THRESHOLD: f64 = 0.4;

    /// Column offset of the head at `tick`: 0 or 1.
    pub fn sway(&self, tick: u64, rate: f64) -> i32 {
        if (tick as f64 * rate + self.phase).sin() > Self::SWAY_THRESHOLD {
            1
        } else {
            0
        }
    }

    pub fn random_phase(rng: &mut SceneRng) -> f64 {
        rng.next_f64() * PI * 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrassClump {
    pub x: i32,
    pub kind: GrassKind,
}

impl GrassClump {
    pub fn anchor(&self) -> i32 {
        self.x + self.kind.width() as i32 / 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rock {
    pub x: i32,
    pub kind: RockKind,
}

impl Rock {
    pub fn anchor(&self) -> i32 {
        self.x + self.kind.width() as i32 / 2
    }
}
