// OneButton Demo - Indicator LED Driver
//
// Simple GPIO-driven LED used to acknowledge button events.

use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

use crate::board::INDICATOR_PULSE_MS;

pub struct IndicatorDriver<'d> {
    pin: PinDriver<'d, AnyOutputPin, Output>,
}

impl<'d> IndicatorDriver<'d> {
    pub fn new(pin: PinDriver<'d, AnyOutputPin, Output>) -> Self {
        Self { pin }
    }

    /// Short flash, blocks for two pulse lengths.
    pub fn pulse(&mut self) {
        self.blink(1);
    }

    /// `count` flashes back to back (blocks the calling thread).
    pub fn blink(&mut self, count: u16) {
        let pulse = Duration::from_millis(INDICATOR_PULSE_MS);
        for _ in 0..count {
            let _ = self.pin.set_high();
            thread::sleep(pulse);
            let _ = self.pin.set_low();
            thread::sleep(pulse);
        }
    }

    pub fn set(&mut self, on: bool) {
        let _ = if on { self.pin.set_high() } else { self.pin.set_low() };
    }
}
