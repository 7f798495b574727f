// OneButton - ESP-IDF Bindings
//
// GPIO input and millisecond clock for buttons on ESP32 targets.

use esp_idf_hal::gpio::{AnyInputPin, Input, PinDriver};
use esp_idf_sys::esp;

use crate::input::ButtonInput;
use crate::time::{Clock, Millis};

/// Milliseconds since boot from the high-resolution ESP timer (wraps at ~49 days).
#[derive(Debug, Clone, Copy, Default)]
pub struct EspClock;

impl Clock for EspClock {
    fn now_ms(&self) -> Millis {
        unsafe { (esp_idf_sys::esp_timer_get_time() / 1000) as Millis }
    }
}

/// Button GPIO driver with the internal pull resistor configured.
pub struct EspButtonPin<'d> {
    driver: PinDriver<'d, AnyInputPin, Input>,
}

impl<'d> EspButtonPin<'d> {
    /// Configure `pin` as input.  An active-low button gets the pull-up, an
    /// active-high one the pull-down.
    pub fn new(pin: AnyInputPin, active_low: bool) -> anyhow::Result<Self> {
        let driver = PinDriver::input(pin)?;
        // `PinDriver::set_pull` needs an output-capable pin type; the raw call
        // works on any input pin.
        let mode = if active_low {
            esp_idf_sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY
        } else {
            esp_idf_sys::gpio_pull_mode_t_GPIO_PULLDOWN_ONLY
        };
        esp!(unsafe { esp_idf_sys::gpio_set_pull_mode(driver.pin(), mode) })?;
        Ok(Self { driver })
    }
}

impl ButtonInput for EspButtonPin<'_> {
    fn is_high(&mut self) -> bool {
        self.driver.is_high()
    }

    fn pin_id(&self) -> u16 {
        self.driver.pin() as u16
    }
}
