use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Paces the game loop
pub(crate) trait Clock {
    /// Block until the next frame boundary for a loop running at `rate` ticks
    /// per second
    fn tick(&mut self, rate: NonZeroU32);
}

/// A [`Clock`] that sleeps the thread until one tick period has passed since
/// the previous call.  The first call returns immediately.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub(crate) fn new() -> FrameClock {
        FrameClock::default()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, rate: NonZeroU32) {
        let period = Duration::from_secs(1) / rate.get();
        if let Some(last) = self.last_tick {
            let wait = period.saturating_sub(last.elapsed());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_one_period_between_ticks() {
        let rate = NonZeroU32::new(50).unwrap();
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(rate);
        assert!(start.elapsed() < Duration::from_millis(20));
        clock.tick(rate);
        clock.tick(rate);
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
