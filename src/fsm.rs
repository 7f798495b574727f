// OneButton - Click / Press Classifier
//
// Consumes the debounced level once per tick and turns it into at most one
// `ButtonEvent`.  All intervals are measured from `entry_time`, the timestamp
// of the last state change that restarts the clock.
//
//   Idle ──active──▶ Pressed ──inactive──▶ Released ──▶ Counting ──gap──▶ Idle
//                      │  ▲                               │
//                      │  └────────────active─────────────┘
//                      └─held──▶ LongPress ──inactive──▶ LongPressEnded ──▶ Idle

use crate::config::{ButtonConfig, DEFAULT_MAX_CLICKS};
use crate::events::ButtonEvent;
use crate::time::{elapsed, Millis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Waiting for a press.
    #[default]
    Idle,
    /// Held, not yet long enough to be a long press.
    Pressed,
    /// Released; the click is counted on the next tick.
    Released,
    /// Waiting to see whether another press joins the burst.
    Counting,
    /// Held past the long-press threshold.
    LongPress,
    /// Released after a long press; the stop event fires on the next tick.
    LongPressEnded,
}

#[derive(Debug, Clone)]
pub struct ClickClassifier {
    state: ButtonState,
    idle_signaled: bool,
    entry_time: Millis,
    now: Millis,

    clicks: u16,
    max_clicks: u16,

    click_ms: u16,
    press_ms: u16,
    idle_ms: u16,
    long_press_interval_ms: u16,
    last_during_long_press: Millis,
}

impl ClickClassifier {
    pub fn new(config: &ButtonConfig) -> Self {
        Self {
            state: ButtonState::Idle,
            idle_signaled: false,
            entry_time: 0,
            now: 0,
            clicks: 0,
            max_clicks: DEFAULT_MAX_CLICKS,
            click_ms: config.click_ms,
            press_ms: config.press_ms,
            idle_ms: config.idle_ms,
            long_press_interval_ms: config.long_press_interval_ms,
            last_during_long_press: 0,
        }
    }

    /// Take over the timing fields of `config`.  Current state is kept.
    pub fn configure(&mut self, config: &ButtonConfig) {
        self.click_ms = config.click_ms;
        self.press_ms = config.press_ms;
        self.idle_ms = config.idle_ms;
        self.long_press_interval_ms = config.long_press_interval_ms;
    }

    /// Raise the click bound to at least `clicks`.  Never lowers it.
    pub fn widen_max_clicks(&mut self, clicks: u16) {
        self.max_clicks = self.max_clicks.max(clicks);
    }

    pub fn max_clicks(&self) -> u16 {
        self.max_clicks
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn clicks(&self) -> u16 {
        self.clicks
    }

    /// Time spent in the current state as of the last step.
    pub fn elapsed_in_state(&self) -> Millis {
        elapsed(self.now, self.entry_time)
    }

    pub fn idle_signaled(&self) -> bool {
        self.idle_signaled
    }

    /// Back to `Idle`: clicks cleared, state clock restarted at `now`.
    pub fn reset(&mut self, now: Millis) {
        self.set_state(ButtonState::Idle);
        self.clicks = 0;
        self.entry_time = now;
        self.now = now;
        self.idle_signaled = false;
    }

    /// Advance the machine by one tick.
    pub fn step(&mut self, active: bool, now: Millis) -> Option<ButtonEvent> {
        self.now = now;
        let wait = elapsed(now, self.entry_time);

        let event = match self.state {
            ButtonState::Idle => {
                if active {
                    self.enter(ButtonState::Pressed, now);
                    self.clicks = 0;
                    Some(ButtonEvent::Press)
                } else if !self.idle_signaled && wait > Millis::from(self.idle_ms) {
                    self.idle_signaled = true;
                    Some(ButtonEvent::Idle)
                } else {
                    None
                }
            }

            ButtonState::Pressed => {
                if !active {
                    self.enter(ButtonState::Released, now);
                    None
                } else if wait > Millis::from(self.press_ms) {
                    // entry time is kept so `elapsed_in_state` reports the whole hold
                    self.set_state(ButtonState::LongPress);
                    Some(ButtonEvent::LongPressStart)
                } else {
                    None
                }
            }

            ButtonState::Released => {
                self.clicks = self.clicks.saturating_add(1);
                self.set_state(ButtonState::Counting);
                None
            }

            ButtonState::Counting => {
                if active {
                    self.enter(ButtonState::Pressed, now);
                    None
                } else if wait >= Millis::from(self.click_ms) || self.clicks >= self.max_clicks {
                    let event = ButtonEvent::for_clicks(self.clicks);
                    self.reset(now);
                    Some(event)
                } else {
                    None
                }
            }

            ButtonState::LongPress => {
                if !active {
                    self.set_state(ButtonState::LongPressEnded);
                    None
                } else if elapsed(now, self.last_during_long_press)
                    >= Millis::from(self.long_press_interval_ms)
                {
                    self.last_during_long_press = now;
                    Some(ButtonEvent::DuringLongPress)
                } else {
                    None
                }
            }

            ButtonState::LongPressEnded => {
                self.reset(now);
                Some(ButtonEvent::LongPressStop)
            }
        };

        if let Some(event) = &event {
            log::debug!("button event {:?} at {} ms", event, now);
        }
        event
    }

    fn enter(&mut self, next: ButtonState, now: Millis) {
        self.set_state(next);
        self.entry_time = now;
    }

    fn set_state(&mut self, next: ButtonState) {
        if next != self.state {
            log::trace!("button state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self::new(&ButtonConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step with a constant level every `period` ms over `[from, to)`.
    fn run(
        fsm: &mut ClickClassifier,
        active: bool,
        from: Millis,
        to: Millis,
        period: Millis,
        out: &mut Vec<(Millis, ButtonEvent)>,
    ) {
        let mut t = from;
        while t < to {
            if let Some(event) = fsm.step(active, t) {
                out.push((t, event));
            }
            t += period;
        }
    }

    fn kinds(events: &[(Millis, ButtonEvent)]) -> Vec<ButtonEvent> {
        events.iter().map(|(_, e)| *e).collect()
    }

    #[test]
    fn single_click_with_default_bound_fires_right_after_release() {
        let mut fsm = ClickClassifier::default();
        let mut events = Vec::new();

        run(&mut fsm, true, 0, 100, 10, &mut events);
        run(&mut fsm, false, 100, 200, 10, &mut events);

        assert_eq!(
            events,
            vec![(0, ButtonEvent::Press), (120, ButtonEvent::Click)]
        );
        assert_eq!(fsm.state(), ButtonState::Idle);
        assert_eq!(fsm.clicks(), 0);
    }

    #[test]
    fn single_click_waits_for_gap_when_bound_widened() {
        let mut fsm = ClickClassifier::default();
        fsm.widen_max_clicks(2);
        let mut events = Vec::new();

        run(&mut fsm, true, 0, 100, 10, &mut events);
        run(&mut fsm, false, 100, 600, 10, &mut events);

        assert_eq!(
            events,
            vec![(0, ButtonEvent::Press), (500, ButtonEvent::Click)]
        );
    }

    #[test]
    fn two_short_presses_make_one_double_click() {
        let mut fsm = ClickClassifier::default();
        fsm.widen_max_clicks(2);
        let mut events = Vec::new();

        run(&mut fsm, true, 0, 100, 10, &mut events);
        run(&mut fsm, false, 100, 250, 10, &mut events);
        run(&mut fsm, true, 250, 350, 10, &mut events);
        run(&mut fsm, false, 350, 900, 10, &mut events);

        assert_eq!(
            kinds(&events),
            vec![ButtonEvent::Press, ButtonEvent::DoubleClick]
        );
    }

    #[test]
    fn three_presses_with_multi_bound() {
        let mut fsm = ClickClassifier::default();
        fsm.widen_max_clicks(100);
        let mut events = Vec::new();

        for burst in 0..3 {
            let start = burst * 200;
            run(&mut fsm, true, start, start + 80, 10, &mut events);
            run(&mut fsm, false, start + 80, start + 200, 10, &mut events);
        }
        run(&mut fsm, false, 600, 1200, 10, &mut events);

        assert_eq!(
            kinds(&events),
            vec![ButtonEvent::Press, ButtonEvent::MultiClick(3)]
        );
    }

    #[test]
    fn long_press_sequence() {
        let config = ButtonConfig::default().with_long_press_interval_ms(100);
        let mut fsm = ClickClassifier::new(&config);
        let mut events = Vec::new();

        run(&mut fsm, true, 0, 1100, 10, &mut events);
        run(&mut fsm, false, 1100, 1200, 10, &mut events);

        let kinds = kinds(&events);
        assert_eq!(kinds[0], ButtonEvent::Press);
        assert_eq!(kinds[1], ButtonEvent::LongPressStart);
        assert_eq!(*kinds.last().unwrap(), ButtonEvent::LongPressStop);
        assert!(!kinds.contains(&ButtonEvent::Click));

        let repeats: Vec<Millis> = events
            .iter()
            .filter(|(_, e)| *e == ButtonEvent::DuringLongPress)
            .map(|(t, _)| *t)
            .collect();
        assert!(!repeats.is_empty());
        for pair in repeats.windows(2) {
            assert!(pair[1] - pair[0] >= 100);
        }
        let count = |kind: ButtonEvent| events.iter().filter(|(_, e)| *e == kind).count();
        assert_eq!(count(ButtonEvent::LongPressStart), 1);
        assert_eq!(count(ButtonEvent::LongPressStop), 1);
    }

    #[test]
    fn long_press_keeps_hold_time() {
        let mut fsm = ClickClassifier::default();
        let mut events = Vec::new();

        run(&mut fsm, true, 0, 1000, 10, &mut events);

        assert_eq!(fsm.state(), ButtonState::LongPress);
        assert_eq!(fsm.elapsed_in_state(), 990);
    }

    #[test]
    fn idle_fires_once_per_idle_span() {
        let mut fsm = ClickClassifier::default();
        let mut events = Vec::new();

        run(&mut fsm, false, 0, 3000, 10, &mut events);
        assert_eq!(events, vec![(1010, ButtonEvent::Idle)]);
        assert!(fsm.idle_signaled());

        events.clear();
        run(&mut fsm, true, 3000, 3050, 10, &mut events);
        run(&mut fsm, false, 3050, 5000, 10, &mut events);
        assert_eq!(
            kinds(&events),
            vec![ButtonEvent::Press, ButtonEvent::Click, ButtonEvent::Idle]
        );
    }

    #[test]
    fn press_wins_over_pending_idle() {
        let mut fsm = ClickClassifier::default();

        assert_eq!(fsm.step(true, 5000), Some(ButtonEvent::Press));
        assert!(!fsm.idle_signaled());
    }

    #[test]
    fn reset_restarts_state_clock() {
        let mut fsm = ClickClassifier::default();
        fsm.step(true, 0);
        fsm.step(false, 50);
        fsm.step(false, 60);
        assert_eq!(fsm.step(false, 70), Some(ButtonEvent::Click));
        assert_eq!(fsm.state(), ButtonState::Idle);

        fsm.reset(80);
        fsm.step(false, 90);
        assert_eq!(fsm.elapsed_in_state(), 10);
    }

    #[test]
    fn elapsed_is_zero_right_after_reset() {
        let mut fsm = ClickClassifier::default();
        run(&mut fsm, true, 0, 100, 10, &mut Vec::new());
        assert_eq!(fsm.elapsed_in_state(), 90);

        fsm.reset(100);
        assert_eq!(fsm.elapsed_in_state(), 0);
        assert_eq!(fsm.state(), ButtonState::Idle);
    }

    #[test]
    fn widen_never_narrows() {
        let mut fsm = ClickClassifier::default();
        fsm.widen_max_clicks(100);
        fsm.widen_max_clicks(2);
        assert_eq!(fsm.max_clicks(), 100);
    }
}
