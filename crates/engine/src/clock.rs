/// Fixed-rate frame gate fed by display refresh timestamps.
///
/// The host calls [`FrameClock::accept`] on every refresh callback. A frame is
/// accepted only once a full interval has elapsed since the last accepted
/// frame; the remainder (`elapsed mod interval`) is carried over so the
/// logical rate does not drift with the refresh rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    last_ms: f64,
    accepted: u64,
}

impl FrameClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
            accepted: 0,
        }
    }

    pub fn from_fps(fps: f64) -> Self {
        Self::new(1000.0 / fps)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms;
    }

    /// Number of frames accepted so far.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Decide whether the refresh at `now_ms` produces a frame.
    ///
    /// Timestamps earlier than the last accepted frame are ignored.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        let dt = now_ms - self.last_ms;
        // Written as a negated `>=` so a NaN timestamp is rejected too.
        if !(dt >= self.interval_ms) {
            return false;
        }
        self.last_ms = now_ms - dt % self.interval_ms;
        self.accepted += 1;
        true
    }
}
