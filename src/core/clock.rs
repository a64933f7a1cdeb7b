use std::time::Instant;

/// Source of frame timing. Reading the delta consumes it: the next read
/// measures from this one. `elapsed` is the time up to the last delta read,
/// kept in f64 so long sessions don't lose resolution.
pub trait FrameClock {
    /// Seconds since the previous `delta` call (or since start)
    fn delta(&mut self) -> f32;

    /// Total seconds consumed through `delta` so far
    fn elapsed(&self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Clock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    fn elapsed(&self) -> f64 {
        self.last_tick.duration_since(self.start).as_secs_f64()
    }
}

/// Deterministic clock for headless runs and tests: every read yields `step`
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f32,
    frames: u64,
}

impl FixedStepClock {
    pub fn new(step: f32) -> Self {
        Self { step, frames: 0 }
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl FrameClock for FixedStepClock {
    fn delta(&mut self) -> f32 {
        self.frames += 1;
        self.step
    }

    fn elapsed(&self) -> f64 {
        self.step as f64 * self.frames as f64
    }
}
