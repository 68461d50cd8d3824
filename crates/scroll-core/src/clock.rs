use instant::Instant;

/// Monotonic frame clock reporting elapsed and per-frame delta seconds.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    previous_sec: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            previous_sec: 0.0,
        }
    }

    /// Returns `(elapsed_sec, delta_sec)` since start and since the last tick.
    pub fn tick(&mut self) -> (f64, f32) {
        let elapsed = self.start.elapsed().as_secs_f64();
        let delta = (elapsed - self.previous_sec).max(0.0) as f32;
        self.previous_sec = elapsed;
        (elapsed, delta)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
