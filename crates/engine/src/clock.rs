//! Timing collaborator and fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Millisecond clock with a blocking sleep.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;

    /// Block the calling thread.
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Caps the loop at a target frame rate.
///
/// `tick` sleeps for whatever is left of the frame budget since the previous
/// tick. A slow frame is not made up for later.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_ms: u64,
    last_ms: Option<u64>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_ms: 1000 / fps.max(1) as u64,
            last_ms: None,
        }
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    /// Wait out the rest of the frame. Returns milliseconds since the
    /// previous tick (0 on the first call).
    pub fn tick(&mut self, clock: &mut impl Clock) -> u64 {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(clock.now_ms());
            return 0;
        };

        let elapsed = clock.now_ms().saturating_sub(last);
        if elapsed < self.frame_ms {
            clock.sleep(Duration::from_millis(self.frame_ms - elapsed));
        }

        let now = clock.now_ms();
        self.last_ms = Some(now);
        now.saturating_sub(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::ManualClock;

    #[test]
    fn pacer_sleeps_remaining_budget() {
        let mut clock = ManualClock::new(0);
        let mut pacer = FramePacer::new(60);
        assert_eq!(pacer.frame_ms(), 16);

        assert_eq!(pacer.tick(&mut clock), 0);
        clock.advance(4);
        assert_eq!(pacer.tick(&mut clock), 16);
        assert_eq!(clock.slept(), &[Duration::from_millis(12)]);
    }

    #[test]
    fn pacer_does_not_sleep_after_slow_frame() {
        let mut clock = ManualClock::new(100);
        let mut pacer = FramePacer::new(60);
        pacer.tick(&mut clock);
        clock.advance(40);
        assert_eq!(pacer.tick(&mut clock), 40);
        assert!(clock.slept().is_empty());
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
