use ascii_garden::core::SceneRng;
use ascii_garden::engine::{FrameClock, Garden};
use ascii_garden::types::{GardenAction, GardenConfig, GridSize, Variant};

fn garden(cols: u16, rows: u16) -> Garden {
    Garden::new(GridSize::new(cols, rows), GardenConfig::default()).unwrap()
}

/// Refresh timestamps with 7..=23 ms gaps, repeating.
fn jittery_timestamps(until_ms: u64) -> Vec<f64> {
    let gaps = [16, 7, 23, 16, 11, 19, 16, 9];
    let mut t = 0;
    let mut out = Vec::new();
    for gap in gaps.iter().cycle() {
        t += gap;
        if t > until_ms {
            break;
        }
        out.push(t as f64);
    }
    out
}

#[test]
fn every_frame_matches_grid_size() {
    let mut g = garden(57, 21);
    for _ in 0..200 {
        let frame = g.step();
        assert_eq!(frame.size(), GridSize::new(57, 21));
        let text = frame.to_text();
        assert_eq!(text.lines().count(), 21);
        assert!(text.lines().all(|line| line.chars().count() == 57));
    }
}

#[test]
fn refresh_rate_does_not_change_logical_rate() {
    let mut g = garden(40, 20);
    let timestamps = jittery_timestamps(10_000);
    let last = *timestamps.last().unwrap();

    let mut frames = 0;
    for t in timestamps {
        if g.on_refresh(t).is_some() {
            frames += 1;
        }
    }

    let interval = g.clock().interval_ms();
    assert_eq!(interval, 125.0);
    assert_eq!(frames, (last / interval).floor() as u64);
    assert_eq!(g.tick(), frames);
}

#[test]
fn clock_never_exceeds_elapsed_intervals() {
    for fps in [1.0, 8.0, 40.0, 50.0] {
        let mut clock = FrameClock::from_fps(fps);
        let timestamps = jittery_timestamps(5_000);
        for &t in &timestamps {
            clock.accept(t);
            let bound = (t / clock.interval_ms()).floor() as u64;
            assert!(clock.accepted() <= bound, "fps {fps} at {t}");
        }
    }
}

#[test]
fn resize_rebuilds_for_new_size() {
    let mut g = garden(40, 20);
    g.step();
    let old_seed = g.scene().seed();

    let size = GridSize::new(90, 32);
    g.resize(size);

    assert_eq!(g.size(), size);
    assert_eq!(g.frame().size(), size);
    assert_eq!(g.scene().seed(), SceneRng::seed_for(size));
    assert_ne!(g.scene().seed(), old_seed);
    assert_eq!(g.step().size(), size);
}

#[test]
fn paused_garden_skips_refreshes() {
    let mut g = garden(40, 20);
    g.apply(GardenAction::TogglePause);
    assert!(g.is_paused());

    for t in jittery_timestamps(2_000) {
        assert!(g.on_refresh(t).is_none());
    }
    assert_eq!(g.tick(), 0);

    g.apply(GardenAction::TogglePause);
    assert!(g.on_refresh(2_500.0).is_some());
    assert_eq!(g.tick(), 1);
}

#[test]
fn cycling_variant_rebuilds_scene() {
    let mut g = garden(60, 24);
    assert_eq!(g.scene().variant(), Variant::Full);

    g.apply(GardenAction::CycleVariant);
    assert_eq!(g.config().variant, Variant::Footer);
    assert_eq!(g.scene().variant(), Variant::Footer);
    assert!(g.scene().stars.is_empty());

    g.apply(GardenAction::CycleVariant);
    g.apply(GardenAction::CycleVariant);
    assert_eq!(g.scene().variant(), Variant::Full);
}

#[test]
fn speed_actions_stay_clamped() {
    let mut g = garden(40, 20);
    for _ in 0..50 {
        g.apply(GardenAction::Faster);
    }
    assert_eq!(g.config().fps, 60.0);
    for _ in 0..50 {
        g.apply(GardenAction::Slower);
    }
    assert_eq!(g.config().fps, 1.0);
    assert_eq!(g.clock().interval_ms(), 1000.0);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GardenConfig {
        fps: 0.0,
        ..GardenConfig::default()
    };
    assert!(Garden::new(GridSize::new(40, 20), config).is_err());
}
