// OneButton - Polled Button Library
//
// Turns a periodically sampled, bouncing button level into press, click,
// double-click, multi-click, long-press and idle events.
//
// Per tick:  raw sample ─▶ Debouncer ─▶ ClickClassifier ─▶ observer slot
//
// One `OneButton` per physical button.  Nothing is allocated and nothing
// blocks; the caller decides the polling cadence (typically 1-10 ms) and must
// not tick the same instance from two contexts at once.

pub mod config;
pub mod debounce;
pub mod events;
pub mod fsm;
pub mod input;
pub mod sim;
pub mod time;

#[cfg(target_os = "espidf")]
pub mod esp;

pub use config::{ButtonConfig, DebounceMode};
pub use debounce::Debouncer;
pub use events::{ButtonEvent, Callback, EventKind, Observers};
pub use fsm::{ButtonState, ClickClassifier};
pub use input::{ButtonInput, OneButton, SimulatedPin};
pub use time::{elapsed, Clock, ManualClock, Millis, SystemClock};
