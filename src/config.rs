// OneButton - Timing Configuration
//
// Default intervals and the per-button `ButtonConfig`.  All values are in
// milliseconds of the instance clock.

// ---------------------------------------------------------------------------
// Defaults (milliseconds)
// ---------------------------------------------------------------------------
pub const DEFAULT_DEBOUNCE_MS: u16 = 50;
pub const DEFAULT_CLICK_MS: u16 = 400; // gap allowed between clicks of a burst
pub const DEFAULT_PRESS_MS: u16 = 800; // hold time before a long press starts
pub const DEFAULT_IDLE_MS: u16 = 1000;
pub const DEFAULT_LONG_PRESS_INTERVAL_MS: u16 = 0; // 0 = repeat on every tick
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10; // typical driver cadence

// ---------------------------------------------------------------------------
// Click counting bounds
// ---------------------------------------------------------------------------
pub const DEFAULT_MAX_CLICKS: u16 = 1;
pub const DOUBLE_CLICK_MAX_CLICKS: u16 = 2;
pub const MULTI_CLICK_MAX_CLICKS: u16 = 100;

// ---------------------------------------------------------------------------
// Pin identifiers
// ---------------------------------------------------------------------------
pub const INVALID_PIN: u16 = u16::MAX;

/// How the debounce window is applied to the two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceMode {
    /// Both edges must persist for the full window.
    #[default]
    Symmetric,
    /// An active sample is accepted at once; only the release edge is filtered.
    FastPress,
}

/// Timing parameters of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub debounce: DebounceMode,
    pub debounce_ms: u16,
    pub click_ms: u16,
    pub press_ms: u16,
    pub idle_ms: u16,
    pub long_press_interval_ms: u16,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceMode::Symmetric,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            click_ms: DEFAULT_CLICK_MS,
            press_ms: DEFAULT_PRESS_MS,
            idle_ms: DEFAULT_IDLE_MS,
            long_press_interval_ms: DEFAULT_LONG_PRESS_INTERVAL_MS,
        }
    }
}

impl ButtonConfig {
    /// Decode the legacy signed debounce value: a negative window selects
    /// [`DebounceMode::FastPress`] with the absolute value as window.
    pub fn from_signed_debounce(ms: i16) -> Self {
        Self::default().with_signed_debounce(ms)
    }

    /// Signed encoding of the current debounce settings.
    pub fn signed_debounce_ms(&self) -> i16 {
        let window = self.debounce_ms.min(i16::MAX as u16) as i16;
        match self.debounce {
            DebounceMode::Symmetric => window,
            DebounceMode::FastPress => -window,
        }
    }

    pub fn with_signed_debounce(mut self, ms: i16) -> Self {
        self.debounce = if ms < 0 {
            DebounceMode::FastPress
        } else {
            DebounceMode::Symmetric
        };
        self.debounce_ms = ms.unsigned_abs();
        self
    }

    pub fn with_debounce(mut self, mode: DebounceMode, ms: u16) -> Self {
        self.debounce = mode;
        self.debounce_ms = ms;
        self
    }

    pub fn with_click_ms(mut self, ms: u16) -> Self {
        self.click_ms = ms;
        self
    }

    pub fn with_press_ms(mut self, ms: u16) -> Self {
        self.press_ms = ms;
        self
    }

    pub fn with_idle_ms(mut self, ms: u16) -> Self {
        self.idle_ms = ms;
        self
    }

    pub fn with_long_press_interval_ms(mut self, ms: u16) -> Self {
        self.long_press_interval_ms = ms;
        self
    }
}
