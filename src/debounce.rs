// OneButton - Debounce Filter
//
// Time-based filter: a raw level is only accepted once it has been observed
// unchanged for the configured window.  In `FastPress` mode an active sample
// is accepted immediately and only the release is filtered.

use crate::config::{DebounceMode, DEFAULT_DEBOUNCE_MS};
use crate::time::{elapsed, Millis};

#[derive(Debug, Clone)]
pub struct Debouncer {
    mode: DebounceMode,
    window_ms: u16,

    stable: bool,
    last_raw: bool,
    last_change: Millis,
}

impl Debouncer {
    pub fn new(mode: DebounceMode, window_ms: u16) -> Self {
        Self {
            mode,
            window_ms,
            stable: false,
            last_raw: false,
            last_change: 0,
        }
    }

    /// Change the filter parameters.  Filter bookkeeping is kept.
    pub fn configure(&mut self, mode: DebounceMode, window_ms: u16) {
        self.mode = mode;
        self.window_ms = window_ms;
    }

    pub fn mode(&self) -> DebounceMode {
        self.mode
    }

    pub fn window_ms(&self) -> u16 {
        self.window_ms
    }

    /// Last accepted level.
    pub fn level(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample taken at `now`; returns the stabilized level.
    pub fn stabilize(&mut self, raw: bool, now: Millis) -> bool {
        if raw && self.mode == DebounceMode::FastPress {
            self.stable = true;
        }

        if raw == self.last_raw {
            if elapsed(now, self.last_change) >= Millis::from(self.window_ms) {
                self.stable = raw;
            }
        } else {
            self.last_raw = raw;
            self.last_change = now;
        }

        self.stable
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DebounceMode::Symmetric, DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample `raw` every `step` ms over `[from, to)`, returning the last output.
    fn hold(deb: &mut Debouncer, raw: bool, from: Millis, to: Millis, step: Millis) -> bool {
        let mut out = deb.level();
        let mut t = from;
        while t < to {
            out = deb.stabilize(raw, t);
            t += step;
        }
        out
    }

    #[test]
    fn accepts_level_after_full_window() {
        let mut deb = Debouncer::new(DebounceMode::Symmetric, 50);

        assert!(!deb.stabilize(true, 0));
        assert!(!deb.stabilize(true, 40));
        assert!(deb.stabilize(true, 50));
    }

    #[test]
    fn single_tick_glitch_is_ignored() {
        let mut deb = Debouncer::new(DebounceMode::Symmetric, 50);
        assert!(!hold(&mut deb, false, 0, 200, 10));

        assert!(!deb.stabilize(true, 200));
        assert!(!deb.stabilize(false, 210));
        assert!(!hold(&mut deb, false, 220, 400, 10));
    }

    #[test]
    fn release_is_filtered_too() {
        let mut deb = Debouncer::new(DebounceMode::Symmetric, 50);
        assert!(hold(&mut deb, true, 0, 100, 10));

        assert!(deb.stabilize(false, 100));
        assert!(deb.stabilize(false, 140));
        assert!(!deb.stabilize(false, 150));
    }

    #[test]
    fn fast_press_accepts_active_immediately() {
        let mut deb = Debouncer::new(DebounceMode::FastPress, 50);

        assert!(deb.stabilize(true, 0));
        // a bounce back to inactive is still filtered
        assert!(deb.stabilize(false, 10));
        assert!(deb.stabilize(false, 40));
        assert!(!deb.stabilize(false, 60));
    }

    #[test]
    fn zero_window_follows_raw_after_one_repeat() {
        let mut deb = Debouncer::new(DebounceMode::Symmetric, 0);

        assert!(!deb.stabilize(true, 0));
        assert!(deb.stabilize(true, 0));
    }

    #[test]
    fn window_measured_across_wraparound() {
        let mut deb = Debouncer::new(DebounceMode::Symmetric, 50);
        let start = u32::MAX - 20;

        assert!(!deb.stabilize(true, start));
        assert!(!deb.stabilize(true, start.wrapping_add(30)));
        assert!(deb.stabilize(true, start.wrapping_add(50)));
    }
}
