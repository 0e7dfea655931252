use std::ops::Range;

use ascii_garden::core::entities::{Bird, Direction, Mobile};
use ascii_garden::core::placer::tree_span;
use ascii_garden::core::terrain::MIN_TERRAIN_HEIGHT;
use ascii_garden::core::{Compositor, Scene, SceneRng, TerrainProfile};
use ascii_garden::types::{GardenConfig, GridSize, Variant, MIN_TERRAIN_ROWS};

fn config(variant: Variant) -> GardenConfig {
    GardenConfig {
        variant,
        ..GardenConfig::default()
    }
}

fn spans(scene: &Scene) -> Vec<Range<i32>> {
    let mut spans: Vec<Range<i32>> = scene.trees.iter().map(|t| tree_span(t.x)).collect();
    spans.extend(scene.flowers.iter().map(|f| f.x..f.x + 1));
    spans.extend(
        scene
            .grass
            .iter()
            .map(|g| g.x..g.x + g.kind.width() as i32),
    );
    spans.extend(
        scene
            .rocks
            .iter()
            .map(|r| r.x..r.x + r.kind.width() as i32),
    );
    spans
}

#[test]
fn same_size_builds_identical_scene() {
    for variant in Variant::ALL {
        let size = GridSize::new(72, 30);
        let a = Scene::build(size, &config(variant));
        let b = Scene::build(size, &config(variant));

        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.terrain, b.terrain);
        assert_eq!(a.trees, b.trees);
        assert_eq!(a.flowers, b.flowers);
        assert_eq!(a.grass, b.grass);
        assert_eq!(a.rocks, b.rocks);
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.clouds, b.clouds);

        let c = Compositor::default();
        assert_eq!(c.compose(&a, 42), c.compose(&b, 42));
    }
}

#[test]
fn seed_follows_grid_size() {
    let size = GridSize::new(40, 20);
    let scene = Scene::build(size, &config(Variant::Full));
    assert_eq!(scene.seed(), 40 * 7 + 20 * 13);
    assert_eq!(scene.seed(), SceneRng::seed_for(size));
}

#[test]
fn terrain_reference_grid() {
    let scene = Scene::build(GridSize::new(40, 20), &config(Variant::Full));
    assert_eq!(scene.terrain.max_height(), 11);
    assert_eq!(scene.terrain.len(), 40);
    assert_eq!(scene.trees.len(), 2);
    assert_eq!(scene.ground_row(), 18);
}

#[test]
fn terrain_heights_stay_in_bounds_for_every_variant() {
    for variant in Variant::ALL {
        for (cols, rows) in [(20, 1), (40, 3), (20, 15), (41, 17), (80, 24), (133, 47), (240, 70)] {
            let size = GridSize::clamped(cols, rows, 1, 1);
            assert!(size.rows >= MIN_TERRAIN_ROWS);
            let terrain = TerrainProfile::synthesize(size, variant);
            let max = terrain.max_height();
            for &h in terrain.heights() {
                assert!(h >= MIN_TERRAIN_HEIGHT, "{cols}x{rows} {variant:?}: {h}");
                assert!(h <= max, "{cols}x{rows} {variant:?}: {h} > {max}");
            }
        }
    }
}

#[test]
fn decorations_never_share_columns() {
    for variant in Variant::ALL {
        for (cols, rows) in [(20, 15), (56, 20), (97, 31), (180, 50)] {
            let scene = Scene::build(GridSize::new(cols, rows), &config(variant));
            let spans = spans(&scene);
            for (i, a) in spans.iter().enumerate() {
                for b in &spans[i + 1..] {
                    assert!(
                        a.end <= b.start || b.end <= a.start,
                        "{cols}x{rows} {variant:?}: {a:?} overlaps {b:?}"
                    );
                }
            }
            for span in &spans {
                for col in span.clone() {
                    assert!(scene.occupancy().is_reserved(col));
                }
            }
        }
    }
}

#[test]
fn decorations_stay_on_screen() {
    let scene = Scene::build(GridSize::new(64, 24), &config(Variant::Meadow));
    for f in &scene.flowers {
        assert!(f.x >= 1 && f.x <= 62);
    }
    for g in &scene.grass {
        assert!(g.x >= 0 && g.x + g.kind.width() as i32 <= 64);
    }
    for r in &scene.rocks {
        assert!(r.x >= 0 && r.x + r.kind.width() as i32 <= 64);
    }
}

#[test]
fn variants_choose_their_layers() {
    let size = GridSize::new(60, 24);

    let full = Scene::build(size, &config(Variant::Full));
    assert!(!full.stars.is_empty());
    assert!(!full.clouds.is_empty());
    assert_eq!(full.birds.len(), 2);
    assert_eq!(full.butterflies.len(), 2);
    assert!(full.grass.is_empty());

    let footer = Scene::build(size, &config(Variant::Footer));
    assert!(footer.stars.is_empty() && footer.clouds.is_empty() && footer.birds.is_empty());
    assert!(footer.butterflies.is_empty());

    let meadow = Scene::build(size, &config(Variant::Meadow));
    assert!(meadow.stars.is_empty() && meadow.birds.is_empty());
    assert_eq!(meadow.butterflies.len(), 2);
    assert!(!meadow.grass.is_empty());
}

#[test]
fn bird_wraps_into_reentry_band() {
    let size = GridSize::new(40, 20);
    let mut rng = SceneRng::for_size(size);
    let bird = Bird {
        x: 45.0,
        y: 4,
        speed: 0.22,
        frame: 0.0,
        dir: Direction::Right,
    };

    let next = bird.advance(size, &mut rng);
    assert_eq!(next.x, -Bird::WRAP_MARGIN);
    assert!((3..5).contains(&next.y));

    let left = Bird {
        x: -5.0,
        dir: Direction::Left,
        ..bird
    };
    let next = left.advance(size, &mut rng);
    assert_eq!(next.x, 40.0 + Bird::WRAP_MARGIN);
    assert!((3..5).contains(&next.y));
}

#[test]
fn advance_moves_only_mobile_entities() {
    let scene = Scene::build(GridSize::new(50, 22), &config(Variant::Full));
    let next = scene.advance();

    assert_eq!(next.terrain, scene.terrain);
    assert_eq!(next.trees, scene.trees);
    assert_eq!(next.flowers, scene.flowers);
    assert_eq!(next.occupancy(), scene.occupancy());
    assert_ne!(next.birds[0].x, scene.birds[0].x);
    assert!(next.stars[0].frame > scene.stars[0].frame);
}
