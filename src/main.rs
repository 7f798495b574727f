// OneButton Demo - Entry Point
//
// On ESP32:
//   1. Bind the BOOT button (active LOW) and the on-board LED.
//   2. Spawn the button task, which polls at 100 Hz.
//   3. Log every event and acknowledge it on the LED.
//
// On the host the same library replays a scripted button level
// (`onebutton "1:100,0:600"`) and prints the resulting event trace.

#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
mod board;
#[cfg(target_os = "espidf")]
mod drivers;
#[cfg(target_os = "espidf")]
mod tasks;

use onebutton::ButtonEvent;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::sync::mpsc;
    use std::thread;

    use esp_idf_hal::gpio::{InputPin, OutputPin, PinDriver};
    use esp_idf_hal::prelude::*;
    use onebutton::esp::EspButtonPin;

    use crate::board::*;
    use crate::drivers::indicator::IndicatorDriver;

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("OneButton demo starting…");

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    let button = EspButtonPin::new(peripherals.pins.gpio9.downgrade_input(), BUTTON_ACTIVE_LOW)?;
    let led = PinDriver::output(peripherals.pins.gpio8.downgrade_output())?;
    let mut indicator = IndicatorDriver::new(led);
    log::info!("Button on GPIO{}, indicator on GPIO{}", PIN_BUTTON, PIN_INDICATOR);

    // ---- Button task ------------------------------------------------------
    let (event_tx, event_rx) = mpsc::channel();
    thread::Builder::new()
        .name("button".into())
        .stack_size(STACK_BUTTON)
        .spawn(move || {
            tasks::button::button_task(button, event_tx);
        })?;

    // ---- Event loop -------------------------------------------------------
    for event in event_rx {
        log::info!("{}", describe(&event));
        match event {
            ButtonEvent::Click => indicator.pulse(),
            ButtonEvent::DoubleClick => indicator.blink(2),
            ButtonEvent::MultiClick(clicks) => indicator.blink(clicks.min(INDICATOR_MAX_BLINKS)),
            ButtonEvent::LongPressStart => indicator.set(true),
            ButtonEvent::LongPressStop => indicator.set(false),
            ButtonEvent::Press | ButtonEvent::DuringLongPress | ButtonEvent::Idle => {}
        }
    }

    anyhow::bail!("button task exited")
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use onebutton::sim::{parse_script, replay, ReplayOptions};

    let script = std::env::args()
        .nth(1)
        .unwrap_or_else(|| board::DEFAULT_SCRIPT.to_string());
    let segments = parse_script(&script).with_context(|| format!("invalid script {:?}", script))?;

    let options = ReplayOptions {
        multi_click: true,
        ..ReplayOptions::default()
    };
    for (at, event) in replay(&segments, &options)? {
        println!("{:>7} ms  {}", at, describe(&event));
    }
    Ok(())
}

fn describe(event: &ButtonEvent) -> String {
    match event {
        ButtonEvent::MultiClick(clicks) => format!("{} x{}", event.kind().name(), clicks),
        _ => event.kind().name().to_string(),
    }
}
