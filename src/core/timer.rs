/// Self-contained timers: each accumulates what it is fed and decides when to fire

/// Window timer: fires once `interval` seconds of delta have accumulated,
/// reporting how long the window actually was
#[derive(Debug, Clone, Copy)]
pub struct Window {
    interval: f32,
    accumulated: f32,
}

impl Window {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Update with delta, returns the closed window length when it fires
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.accumulated += delta;

        if self.accumulated >= self.interval {
            let length = self.accumulated;
            self.accumulated = 0.0;
            Some(length)
        } else {
            None
        }
    }
}

/// Frame counter - fires every N ticks
#[derive(Debug, Clone, Copy)]
pub struct EveryNTicks {
    interval: u64,
    count: u64,
}

impl EveryNTicks {
    /// Create timer that fires every N ticks. An interval of zero never fires.
    pub fn new(interval: u64) -> Self {
        Self { interval, count: 0 }
    }

    /// Tick once, returns true if should fire
    pub fn tick(&mut self) -> bool {
        if self.interval == 0 {
            return false;
        }
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fires_after_interval() {
        let mut window = Window::new(1.0);

        assert_eq!(window.tick(0.4), None);
        assert_eq!(window.tick(0.4), None);
        let closed = window.tick(0.4).unwrap();
        assert!((closed - 1.2).abs() < 1e-6);

        // Starts a fresh window
        assert_eq!(window.tick(0.5), None);
    }

    #[test]
    fn every_n_ticks_fires_periodically() {
        let mut timer = EveryNTicks::new(3);

        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(!timer.tick());
    }

    #[test]
    fn every_zero_ticks_never_fires() {
        let mut timer = EveryNTicks::new(0);
        assert!((0..10).all(|_| !timer.tick()));
    }
}
