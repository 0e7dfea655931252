//! Decorative placement with column occupancy.
//!
//! Categories are placed in a fixed order (trees, flowers, grass, rocks);
//! each later category rejects draws that land on columns reserved by an
//! earlier one. A rejected draw is skipped, never retried, so a crowded grid
//! ends up with fewer decorations than the target count.

use std::collections::BTreeSet;
use std::ops::Range;

use arrayvec::ArrayVec;

use crate::entities::{Flower, GrassClump, Rock, Tree};
use crate::glyphs::{FlowerHead, GrassKind, RockKind, TreeKind};
use crate::rng::SceneRng;

pub const MAX_TREES: usize = 3;

/// Columns reserved on each side of a tree template.
const TREE_MARGIN: i32 = 1;

/// Set of reserved column indices for one scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cols: BTreeSet<i32>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_reserved(&self, col: i32) -> bool {
        self.cols.contains(&col)
    }

    pub fn is_span_free(&self, span: Range<i32>) -> bool {
        self.cols.range(span).next().is_none()
    }

    pub fn reserve(&mut self, col: i32) {
        self.cols.insert(col);
    }

    pub fn reserve_span(&mut self, span: Range<i32>) {
        self.cols.extend(span);
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.cols.iter().copied()
    }
}

/// Number of trees for a grid width: one per 14 columns, between 1 and 3.
pub fn tree_count(cols: u16) -> usize {
    (cols as usize / 14).clamp(1, MAX_TREES)
}

/// Columns a tree at `x` keeps clear of other decorations.
pub fn tree_span(x: i32) -> Range<i32> {
    x - TREE_MARGIN..x + TreeKind::WIDTH as i32 + TREE_MARGIN
}

/// Evenly spaced trees, templates cycling by index.
pub fn place_trees(cols: u16, occupancy: &mut Occupancy) -> ArrayVec<Tree, MAX_TREES> {
    let count = tree_count(cols);
    let spacing = cols as f64 / (count + 1) as f64;

    (0..count)
        .map(|i| {
            let x = ((spacing * (i + 1) as f64).floor() as i32 - TreeKind::TRUNK_OFFSET).max(0);
            occupancy.reserve_span(tree_span(x));
            Tree {
                x,
                kind: TreeKind::cycle(i),
            }
        })
        .collect()
}

pub fn flower_target(cols: u16) -> usize {
    (cols as usize / 3).max(8)
}

pub fn place_flowers(cols: u16, rng: &mut SceneRng, occupancy: &mut Occupancy) -> Vec<Flower> {
    let mut flowers = Vec::new();
    let inner = (cols as usize).saturating_sub(2);

    for _ in 0..flower_target(cols) {
        let x = 1 + rng.next_below(inner) as i32;
        if occupancy.is_reserved(x) {
            continue;
        }
        occupancy.reserve(x);
        let height = 1 + rng.next_below(2) as u8;
        let head = FlowerHead::ALL[rng.next_below(FlowerHead::ALL.len())];
        let phase = Flower::random_phase(rng);
        flowers.push(Flower {
            x,
            height,
            head,
            phase,
        });
    }
    flowers
}

pub fn grass_target(cols: u16) -> usize {
    (cols as usize / 8).max(4)
}

pub fn rock_target(cols: u16) -> usize {
    (cols as usize / 16).max(2)
}

/// Draw a kind, then a left edge that keeps the whole shape on screen.
/// Returns `None` when the span collides with a reserved column.
fn place_span<K: Copy>(
    cols: u16,
    kinds: &[K],
    width_of: impl Fn(K) -> usize,
    rng: &mut SceneRng,
    occupancy: &mut Occupancy,
) -> Option<(i32, K)> {
    let kind = kinds[rng.next_below(kinds.len())];
    let width = width_of(kind);
    let slots = (cols as usize + 1).saturating_sub(width);
    let x = rng.next_below(slots) as i32;
    let span = x..x + width as i32;
    if !occupancy.is_span_free(span.clone()) {
        return None;
    }
    occupancy.reserve_span(span);
    Some((x, kind))
}

pub fn place_grass(cols: u16, rng: &mut SceneRng, occupancy: &mut Occupancy) -> Vec<GrassClump> {
    (0..grass_target(cols))
        .filter_map(|_| place_span(cols, &GrassKind::ALL, |k| k.width(), rng, occupancy))
        .map(|(x, kind)| GrassClump { x, kind })
        .collect()
}

pub fn place_rocks(cols: u16, rng: &mut SceneRng, occupancy: &mut Occupancy) -> Vec<Rock> {
    (0..rock_target(cols))
        .filter_map(|_| place_span(cols, &RockKind::ALL, |k| k.width(), rng, occupancy))
        .map(|(x, kind)| Rock { x, kind })
        .collect()
}
