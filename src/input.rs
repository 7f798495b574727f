// OneButton - Button Instance
//
// One debounced, classified button.  Designed to be polled every 1-10 ms:
// each `tick` reads the pin, runs the debounce filter, steps the classifier
// and calls the observer registered for the emitted event (if any).

use std::cell::Cell;

use crate::config::{
    ButtonConfig, DebounceMode, DOUBLE_CLICK_MAX_CLICKS, MULTI_CLICK_MAX_CLICKS,
};
use crate::debounce::Debouncer;
use crate::events::{ButtonEvent, Callback, EventKind, Observers};
use crate::fsm::{ButtonState, ClickClassifier};
use crate::time::{Clock, Millis};

/// Raw access to the pin a button is wired to.
pub trait ButtonInput {
    /// Current electrical level, `true` meaning high.
    fn is_high(&mut self) -> bool;

    /// Pin number, for diagnostics.
    fn pin_id(&self) -> u16;
}

impl<T: ButtonInput + ?Sized> ButtonInput for &mut T {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }

    fn pin_id(&self) -> u16 {
        (**self).pin_id()
    }
}

/// Pin whose level is set by hand.  Used by the host simulator and tests.
#[derive(Debug)]
pub struct SimulatedPin {
    pin: u16,
    high: Cell<bool>,
}

impl SimulatedPin {
    pub fn new(pin: u16, high: bool) -> Self {
        Self {
            pin,
            high: Cell::new(high),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }
}

impl ButtonInput for &SimulatedPin {
    fn is_high(&mut self) -> bool {
        self.high.get()
    }

    fn pin_id(&self) -> u16 {
        self.pin
    }
}

pub struct OneButton<I, C> {
    input: Option<I>,
    active_low: bool,
    clock: C,

    config: ButtonConfig,
    debouncer: Debouncer,
    classifier: ClickClassifier,
    observers: Observers,
}

impl<I: ButtonInput, C: Clock> OneButton<I, C> {
    /// Button bound to `input`.  With `active_low` a low level means pressed.
    pub fn new(input: I, active_low: bool, clock: C) -> Self {
        let mut button = Self::unbound(clock);
        button.setup(input, active_low);
        button
    }

    /// Button with default timing and no pin yet.  `tick` does nothing until
    /// [`setup`](Self::setup) binds an input.  The idle span starts at the
    /// current clock reading.
    pub fn unbound(clock: C) -> Self {
        let config = ButtonConfig::default();
        let mut classifier = ClickClassifier::new(&config);
        classifier.reset(clock.now_ms());
        Self {
            input: None,
            active_low: true,
            clock,
            config,
            debouncer: Debouncer::new(config.debounce, config.debounce_ms),
            classifier,
            observers: Observers::new(),
        }
    }

    /// Bind (or rebind) the pin.  Classifier and filter state are kept.
    pub fn setup(&mut self, input: I, active_low: bool) {
        log::info!(
            "button bound to pin {} (active {})",
            input.pin_id(),
            if active_low { "low" } else { "high" }
        );
        self.input = Some(input);
        self.active_low = active_low;
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Sample the pin and advance the button by one tick.
    pub fn tick(&mut self) -> Option<ButtonEvent> {
        let input = self.input.as_mut()?;
        let active = input.is_high() != self.active_low;
        self.tick_level(active)
    }

    /// Advance with a level obtained elsewhere (`true` = pressed).
    pub fn tick_level(&mut self, active: bool) -> Option<ButtonEvent> {
        let now = self.clock.now_ms();
        let level = self.debouncer.stabilize(active, now);
        let event = self.classifier.step(level, now)?;
        self.observers.notify(&event);
        Some(event)
    }

    /// Abandon the current sequence and return to Idle.  The debounce filter
    /// is not touched.
    pub fn reset(&mut self) {
        self.classifier.reset(self.clock.now_ms());
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Signed debounce window: a negative value accepts presses immediately
    /// and only filters releases.
    pub fn set_debounce_ms(&mut self, ms: i16) {
        let config = self.config.with_signed_debounce(ms);
        if config.debounce != self.config.debounce {
            log::warn!("debounce mode switched to {:?}", config.debounce);
        }
        self.set_config(config);
    }

    pub fn set_debounce(&mut self, mode: DebounceMode, ms: u16) {
        self.set_config(self.config.with_debounce(mode, ms));
    }

    pub fn set_click_ms(&mut self, ms: u16) {
        self.set_config(self.config.with_click_ms(ms));
    }

    pub fn set_press_ms(&mut self, ms: u16) {
        self.set_config(self.config.with_press_ms(ms));
    }

    pub fn set_idle_ms(&mut self, ms: u16) {
        self.set_config(self.config.with_idle_ms(ms));
    }

    pub fn set_long_press_interval_ms(&mut self, ms: u16) {
        self.set_config(self.config.with_long_press_interval_ms(ms));
    }

    pub fn set_config(&mut self, config: ButtonConfig) {
        self.config = config;
        self.debouncer.configure(config.debounce, config.debounce_ms);
        self.classifier.configure(&config);
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register `callback` for `kind`, replacing the previous one.  Listening
    /// for double or multi clicks raises the number of clicks counted per
    /// burst; it is never lowered again.
    pub fn attach(&mut self, kind: EventKind, callback: Callback) {
        match kind {
            EventKind::DoubleClick => self.classifier.widen_max_clicks(DOUBLE_CLICK_MAX_CLICKS),
            EventKind::MultiClick => self.classifier.widen_max_clicks(MULTI_CLICK_MAX_CLICKS),
            _ => {}
        }
        self.observers.set(kind, callback);
    }

    pub fn detach(&mut self, kind: EventKind) {
        self.observers.clear(kind);
    }

    pub fn attach_press(&mut self, callback: Callback) {
        self.attach(EventKind::Press, callback);
    }

    pub fn attach_click(&mut self, callback: Callback) {
        self.attach(EventKind::Click, callback);
    }

    pub fn attach_double_click(&mut self, callback: Callback) {
        self.attach(EventKind::DoubleClick, callback);
    }

    pub fn attach_multi_click(&mut self, callback: Callback) {
        self.attach(EventKind::MultiClick, callback);
    }

    pub fn attach_long_press_start(&mut self, callback: Callback) {
        self.attach(EventKind::LongPressStart, callback);
    }

    pub fn attach_during_long_press(&mut self, callback: Callback) {
        self.attach(EventKind::DuringLongPress, callback);
    }

    pub fn attach_long_press_stop(&mut self, callback: Callback) {
        self.attach(EventKind::LongPressStop, callback);
    }

    pub fn attach_idle(&mut self, callback: Callback) {
        self.attach(EventKind::Idle, callback);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> ButtonState {
        self.classifier.state()
    }

    /// Time spent in the current state as of the last tick.
    pub fn pressed_ms(&self) -> Millis {
        self.classifier.elapsed_in_state()
    }

    pub fn number_clicks(&self) -> u16 {
        self.classifier.clicks()
    }

    pub fn max_clicks(&self) -> u16 {
        self.classifier.max_clicks()
    }

    pub fn is_idle(&self) -> bool {
        self.classifier.state() == ButtonState::Idle
    }

    pub fn is_long_pressed(&self) -> bool {
        self.classifier.state() == ButtonState::LongPress
    }

    pub fn debounced_value(&self) -> bool {
        self.debouncer.level()
    }

    /// Bound pin, or `None` before `setup`.
    pub fn pin(&self) -> Option<u16> {
        self.input.as_ref().map(|input| input.pin_id())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
