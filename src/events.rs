// OneButton - Events & Observer Slots

// ---------------------------------------------------------------------------
// Event kinds (one observer slot each)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Press,
    Click,
    DoubleClick,
    MultiClick,
    LongPressStart,
    DuringLongPress,
    LongPressStop,
    Idle,
}

impl EventKind {
    pub const COUNT: usize = 8;

    pub const ALL: [EventKind; Self::COUNT] = [
        Self::Press,
        Self::Click,
        Self::DoubleClick,
        Self::MultiClick,
        Self::LongPressStart,
        Self::DuringLongPress,
        Self::LongPressStop,
        Self::Idle,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    /// Short label for logs and simulator output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::Click => "click",
            Self::DoubleClick => "double-click",
            Self::MultiClick => "multi-click",
            Self::LongPressStart => "long-press-start",
            Self::DuringLongPress => "during-long-press",
            Self::LongPressStop => "long-press-stop",
            Self::Idle => "idle",
        }
    }
}

// ---------------------------------------------------------------------------
// Emitted events
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Debounced level went active from Idle.
    Press,
    /// Burst of exactly one short press.
    Click,
    /// Burst of exactly two short presses.
    DoubleClick,
    /// Burst of three or more short presses; carries the count.
    MultiClick(u16),
    /// Held past the long-press threshold.
    LongPressStart,
    /// Still held; repeats at the long-press interval.
    DuringLongPress,
    /// Released after a long press.
    LongPressStop,
    /// Nothing happened for the idle threshold.
    Idle,
}

impl ButtonEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Press => EventKind::Press,
            Self::Click => EventKind::Click,
            Self::DoubleClick => EventKind::DoubleClick,
            Self::MultiClick(_) => EventKind::MultiClick,
            Self::LongPressStart => EventKind::LongPressStart,
            Self::DuringLongPress => EventKind::DuringLongPress,
            Self::LongPressStop => EventKind::LongPressStop,
            Self::Idle => EventKind::Idle,
        }
    }

    /// Classify a finished click burst.
    pub fn for_clicks(clicks: u16) -> Self {
        match clicks {
            1 => Self::Click,
            2 => Self::DoubleClick,
            n => Self::MultiClick(n),
        }
    }
}

// ---------------------------------------------------------------------------
// Observer slots
// ---------------------------------------------------------------------------

/// Observer invoked synchronously from inside `tick`.  Must not block.
pub type Callback = fn();

#[derive(Debug, Clone, Copy, Default)]
pub struct Observers {
    slots: [Option<Callback>; EventKind::COUNT],
}

impl Observers {
    pub const fn new() -> Self {
        Self {
            slots: [None; EventKind::COUNT],
        }
    }

    /// Install `callback` for `kind`, replacing any previous one.
    pub fn set(&mut self, kind: EventKind, callback: Callback) {
        self.slots[kind.slot()] = Some(callback);
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.slots[kind.slot()] = None;
    }

    pub fn is_set(&self, kind: EventKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    /// Call the observer for `event`, if one is registered.
    pub fn notify(&self, event: &ButtonEvent) -> bool {
        match self.slots[event.kind().slot()] {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static CLICKS: AtomicU32 = AtomicU32::new(0);
    static OTHER: AtomicU32 = AtomicU32::new(0);

    fn on_click() {
        CLICKS.fetch_add(1, Ordering::SeqCst);
    }

    fn on_other() {
        OTHER.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn burst_classification() {
        assert_eq!(ButtonEvent::for_clicks(1), ButtonEvent::Click);
        assert_eq!(ButtonEvent::for_clicks(2), ButtonEvent::DoubleClick);
        assert_eq!(ButtonEvent::for_clicks(5), ButtonEvent::MultiClick(5));
        assert_eq!(ButtonEvent::MultiClick(5).kind(), EventKind::MultiClick);
    }

    #[test]
    fn slots_are_indexed_by_kind() {
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(kind.slot(), i);
        }
    }

    #[test]
    fn notify_only_matching_slot() {
        let mut observers = Observers::new();
        observers.set(EventKind::Click, on_click);

        assert!(observers.notify(&ButtonEvent::Click));
        assert!(!observers.notify(&ButtonEvent::DoubleClick));
        assert_eq!(CLICKS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn set_overwrites_and_clear_removes() {
        let mut observers = Observers::new();
        observers.set(EventKind::Idle, on_click);
        observers.set(EventKind::Idle, on_other);

        assert!(observers.notify(&ButtonEvent::Idle));
        assert_eq!(OTHER.load(Ordering::SeqCst), 1);

        observers.clear(EventKind::Idle);
        assert!(!observers.is_set(EventKind::Idle));
        assert!(!observers.notify(&ButtonEvent::Idle));
    }
}
