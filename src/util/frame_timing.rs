use web_time::{Duration, Instant};

/// Upper bound on a single frame delta, in seconds.
///
/// A stall (debugger, window drag) would otherwise feed one huge delta into
/// the drag and smoothing math.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame clock producing per-frame deltas and a smoothed FPS readout.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start a clock at a given instant.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to now and return the frame delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now` and return the frame delta in seconds, clamped to
    /// [`MAX_FRAME_DELTA`]. An instant earlier than the last tick yields 0.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now
            .checked_duration_since(self.last_frame)
            .unwrap_or(Duration::ZERO);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(MAX_FRAME_DELTA)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
