// OneButton Demo - Button Task
//
// Owns the button and polls it at ~100 Hz.  Every event is forwarded to the
// main thread; double and multi clicks are also logged straight from their
// observer slots.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use onebutton::esp::{EspButtonPin, EspClock};
use onebutton::{ButtonConfig, ButtonEvent, OneButton};

use crate::board::*;

fn on_double_click() {
    log::info!("double click observer");
}

fn on_multi_click() {
    log::info!("multi click observer");
}

pub fn button_task(pin: EspButtonPin<'static>, event_tx: Sender<ButtonEvent>) {
    log::info!("Button task started");

    let mut button = OneButton::new(pin, BUTTON_ACTIVE_LOW, EspClock);
    button.set_config(ButtonConfig::default().with_long_press_interval_ms(LONG_PRESS_REPEAT_MS));
    button.attach_double_click(on_double_click);
    button.attach_multi_click(on_multi_click);

    let poll_interval = Duration::from_millis(BUTTON_POLL_INTERVAL_MS);

    loop {
        if let Some(event) = button.tick() {
            if event_tx.send(event).is_err() {
                // Receiver dropped, nobody is listening any more.
                log::warn!("Event channel closed, exiting button task");
                return;
            }
        }

        thread::sleep(poll_interval);
    }
}
