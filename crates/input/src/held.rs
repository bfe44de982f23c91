//! Held-key tracking for terminal environments.
//!
//! Terminals with the keyboard enhancement protocol report releases, and a
//! key is held from press to release. Elsewhere only presses and autorepeats
//! arrive, so a key counts as held until a short timeout after the last one.

use std::time::{Duration, Instant};

use crate::types::{FlightKey, HeldKeys};

// A single tap must not read as a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

const KEY_COUNT: usize = FlightKey::ALL.len();

#[derive(Debug, Clone)]
pub struct HeldKeyTracker {
    last_seen: [Option<Instant>; KEY_COUNT],
    release_events: bool,
    key_release_timeout: Duration,
}

impl HeldKeyTracker {
    pub fn new() -> Self {
        Self {
            last_seen: [None; KEY_COUNT],
            release_events: false,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// The terminal reports key releases; disables the timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout.as_millis() as u64
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Press or autorepeat.
    pub fn press(&mut self, key: FlightKey, at: Instant) {
        self.last_seen[key.index()] = Some(at);
    }

    pub fn release(&mut self, key: FlightKey) {
        self.last_seen[key.index()] = None;
    }

    /// Keys held at `now`.
    pub fn snapshot(&self, now: Instant) -> HeldKeys {
        let mut keys = HeldKeys::default();
        for key in FlightKey::ALL {
            let held = match self.last_seen[key.index()] {
                None => false,
                Some(_) if self.release_events => true,
                Some(at) => now.saturating_duration_since(at) <= self.key_release_timeout,
            };
            keys.set(key, held);
        }
        keys
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; KEY_COUNT];
    }
}

impl Default for HeldKeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_holds_until_timeout() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new().with_key_release_timeout_ms(50);
        tracker.press(FlightKey::Left, t0);

        assert!(tracker.snapshot(t0 + Duration::from_millis(50)).left);
        assert!(!tracker.snapshot(t0 + Duration::from_millis(51)).left);
    }

    #[test]
    fn test_autorepeat_extends_hold() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new().with_key_release_timeout_ms(50);
        tracker.press(FlightKey::Up, t0);
        tracker.press(FlightKey::Up, t0 + Duration::from_millis(40));

        assert!(tracker.snapshot(t0 + Duration::from_millis(80)).up);
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new().with_release_events(true);
        tracker.press(FlightKey::Right, t0);
        tracker.press(FlightKey::Trigger, t0);

        let later = t0 + Duration::from_secs(10);
        let keys = tracker.snapshot(later);
        assert!(keys.right && keys.trigger);

        tracker.release(FlightKey::Right);
        let keys = tracker.snapshot(later);
        assert!(!keys.right && keys.trigger);
    }

    #[test]
    fn test_keys_are_independent() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new();
        tracker.press(FlightKey::Left, t0);
        tracker.press(FlightKey::Up, t0);

        let keys = tracker.snapshot(t0);
        assert!(keys.left && keys.up);
        assert!(!keys.right && !keys.down && !keys.trigger);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let tracker = HeldKeyTracker::new();
        assert_eq!(tracker.key_release_timeout_ms(), 150);
        assert!(!tracker.release_events());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new().with_release_events(true);
        tracker.press(FlightKey::Down, t0);
        tracker.reset();
        assert_eq!(tracker.snapshot(t0), HeldKeys::default());
    }
}
