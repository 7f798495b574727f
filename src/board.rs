// OneButton Demo - Board Configuration
// Target: ESP32-C3 dev boards (BOOT button on GPIO9, LED on GPIO8)

// ---------------------------------------------------------------------------
// GPIO Pin Definitions
// ---------------------------------------------------------------------------
pub const PIN_BUTTON: i32 = 9; // BOOT button (external pull-up, active LOW)
pub const PIN_INDICATOR: i32 = 8; // on-board LED
pub const BUTTON_ACTIVE_LOW: bool = true;

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_BUTTON: usize = 4096;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const BUTTON_POLL_INTERVAL_MS: u64 = 10; // 100 Hz
pub const LONG_PRESS_REPEAT_MS: u16 = 500;
pub const INDICATOR_PULSE_MS: u64 = 50;
pub const INDICATOR_MAX_BLINKS: u16 = 5;

// ---------------------------------------------------------------------------
// Host simulator
// ---------------------------------------------------------------------------
/// click, double click, long press, then silence long enough for idle
pub const DEFAULT_SCRIPT: &str = "0:300,1:100,0:600,1:80,0:120,1:80,0:600,1:1500,0:1500";
