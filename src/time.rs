// OneButton - Time Base
//
// Millisecond timestamps wrap at `u32::MAX` (~49 days).  Every interval is
// computed as `now - earlier` with wrapping subtraction, never by comparing
// two timestamps directly.

use std::cell::Cell;
use std::time::Instant;

/// Milliseconds on a wrapping 32-bit counter.
pub type Millis = u32;

/// Time elapsed from `since` to `now`, correct across counter wraparound.
#[inline]
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Source of the monotonically increasing millisecond counter.
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Milliseconds since the clock was created, truncated to 32 bits.
#[derive(Debug, Clone, Copy)]
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
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Hand-driven clock for simulation and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    /// Move the clock forward, wrapping at the counter width.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}
