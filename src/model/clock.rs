use std::time::Instant;

/// Per-frame timer. Ticked exactly once per frame, before the update phase
/// consumes the result.
pub struct FrameClock {
    last: Instant,
    elapsed: f32,
    total: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            total: 0.0,
        }
    }

    /// Advances the clock: elapsed becomes the time since the previous tick
    /// (or since construction on the first call).
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.elapsed = (now - self.last).as_secs_f32();
        self.total += self.elapsed;
        self.last = now;
    }

    /// Seconds between the two most recent ticks.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds accumulated over all ticks.
    pub fn total(&self) -> f32 {
        self.total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_zero_before_first_tick() {
        let clock = FrameClock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.total(), 0.0);
    }

    #[test]
    fn test_back_to_back_ticks_are_near_zero() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.tick();
        assert!(clock.elapsed() >= 0.0);
        assert!(clock.elapsed() < 0.1, "immediate re-tick should be near zero");
    }

    #[test]
    fn test_total_is_sum_of_elapsed() {
        let mut clock = FrameClock::new();
        let mut sum = 0.0;
        for _ in 0..5 {
            clock.tick();
            sum += clock.elapsed();
        }
        assert!((clock.total() - sum).abs() < 1e-6);
    }

    #[test]
    fn test_total_never_decreases() {
        let mut clock = FrameClock::new();
        let mut previous = 0.0;
        for _ in 0..10 {
            clock.tick();
            assert!(clock.total() >= previous);
            previous = clock.total();
        }
    }
}
