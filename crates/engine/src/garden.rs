//! `Garden`: owns the live scene and drives it from refresh callbacks.

use ascii_garden_core::{Compositor, Grid, Scene};
use ascii_garden_types::{
    ConfigError, GardenAction, GardenConfig, GridSize, Variant, MAX_FPS, MIN_FPS,
};

use crate::clock::FrameClock;

/// Rate multiplier for one `Faster`/`Slower` step.
const FPS_STEP: f64 = 1.5;

pub struct Garden {
    config: GardenConfig,
    compositor: Compositor,
    scene: Scene,
    clock: FrameClock,
    tick: u64,
    paused: bool,
    frame: Grid,
}

impl Garden {
    pub fn new(size: GridSize, config: GardenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.fit_cells(size.cols, size.rows);
        let compositor = Compositor::from_config(&config);
        let scene = Scene::build(size, &config);
        let frame = compositor.compose(&scene, 0);
        Ok(Self {
            clock: FrameClock::from_fps(config.fps),
            config,
            compositor,
            scene,
            tick: 0,
            paused: false,
            frame,
        })
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn size(&self) -> GridSize {
        self.scene.size()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The most recently composed frame.
    pub fn frame(&self) -> &Grid {
        &self.frame
    }

    /// Refresh callback. Returns the new frame when the clock accepts `now_ms`.
    pub fn on_refresh(&mut self, now_ms: f64) -> Option<&Grid> {
        if self.paused || !self.clock.accept(now_ms) {
            return None;
        }
        Some(self.step())
    }

    /// Produce the next frame unconditionally.
    pub fn step(&mut self) -> &Grid {
        self.tick += 1;
        self.compositor
            .compose_into(&self.scene, self.tick, &mut self.frame);
        self.scene.step();
        tracing::trace!(tick = self.tick, "frame composed");
        &self.frame
    }

    /// Discard the scene and build a fresh one for `size`, clamped to the
    /// configured minimums.
    ///
    /// The tick counter keeps running; entity phases restart with the new scene.
    pub fn resize(&mut self, size: GridSize) {
        let size = self.config.fit_cells(size.cols, size.rows);
        tracing::info!(cols = size.cols, rows = size.rows, "rebuilding scene");
        self.rebuild(size);
    }

    pub fn set_variant(&mut self, variant: Variant) {
        if variant == self.config.variant {
            return;
        }
        tracing::info!(variant = variant.as_str(), "switching variant");
        self.config.variant = variant;
        self.rebuild(self.size());
    }

    /// Change the logical rate, clamped to the supported range.
    pub fn set_fps(&mut self, fps: f64) {
        let fps = fps.clamp(MIN_FPS, MAX_FPS);
        self.config.fps = fps;
        self.clock.set_interval_ms(self.config.frame_interval_ms());
        tracing::debug!(fps, "frame rate changed");
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Apply a user action. `Quit` is left to the caller.
    pub fn apply(&mut self, action: GardenAction) {
        match action {
            GardenAction::TogglePause => self.set_paused(!self.paused),
            GardenAction::CycleVariant => self.set_variant(self.config.variant.next()),
            GardenAction::Faster => self.set_fps(self.config.fps * FPS_STEP),
            GardenAction::Slower => self.set_fps(self.config.fps / FPS_STEP),
            GardenAction::Quit => {}
        }
    }

    fn rebuild(&mut self, size: GridSize) {
        self.scene = Scene::build(size, &self.config);
        // Keep `frame()` in sync with the new size even while paused.
        self.compositor
            .compose_into(&self.scene, self.tick, &mut self.frame);
    }
}
