// OneButton - Host Replay
//
// Replays a scripted button level through a `OneButton` driven by a manual
// clock, so timing behaviour can be checked without hardware.
//
// Script syntax: comma separated `level:duration_ms` segments, where level is
// `1`/`down` (pressed) or `0`/`up` (released), e.g. `0:200,1:100,0:600`.

use anyhow::{bail, Context, Result};

use crate::config::{ButtonConfig, DEFAULT_POLL_INTERVAL_MS};
use crate::events::{ButtonEvent, EventKind};
use crate::input::{OneButton, SimulatedPin};
use crate::time::{Clock, ManualClock, Millis};

const SIM_PIN: u16 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub active: bool,
    pub duration_ms: Millis,
}

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub config: ButtonConfig,
    pub period_ms: Millis,
    pub start_ms: Millis,
    /// Count bursts of two clicks (as if a double-click observer was attached).
    pub double_click: bool,
    /// Count bursts of any length (as if a multi-click observer was attached).
    pub multi_click: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            config: ButtonConfig::default(),
            period_ms: DEFAULT_POLL_INTERVAL_MS as Millis,
            start_ms: 0,
            double_click: true,
            multi_click: false,
        }
    }
}

pub fn parse_script(script: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();

    for (index, part) in script.split(',').map(str::trim).enumerate() {
        if part.is_empty() {
            continue;
        }
        let (level, duration) = part
            .split_once(':')
            .with_context(|| format!("segment {} ({:?}) is not level:duration", index, part))?;

        let active = match level.trim() {
            "1" | "down" => true,
            "0" | "up" => false,
            other => bail!("segment {}: unknown level {:?}", index, other),
        };
        let duration_ms = duration
            .trim()
            .parse::<Millis>()
            .with_context(|| format!("segment {}: bad duration {:?}", index, duration))?;

        segments.push(Segment {
            active,
            duration_ms,
        });
    }

    if segments.is_empty() {
        bail!("script has no segments");
    }
    Ok(segments)
}

fn listen() {}

/// Run `segments` through a fresh button, returning every emitted event with
/// the timestamp of the tick that produced it.
pub fn replay(segments: &[Segment], options: &ReplayOptions) -> Result<Vec<(Millis, ButtonEvent)>> {
    if options.period_ms == 0 {
        bail!("tick period must be at least 1 ms");
    }

    let clock = ManualClock::new(options.start_ms);
    let pin = SimulatedPin::new(SIM_PIN, false);
    let mut button = OneButton::new(&pin, false, &clock);
    button.set_config(options.config);
    if options.double_click {
        button.attach(EventKind::DoubleClick, listen);
    }
    if options.multi_click {
        button.attach(EventKind::MultiClick, listen);
    }

    let mut events = Vec::new();
    for segment in segments {
        pin.set_high(segment.active);

        let mut spent: Millis = 0;
        while spent < segment.duration_ms {
            if let Some(event) = button.tick() {
                events.push((clock.now_ms(), event));
            }
            clock.advance(options.period_ms);
            spent = spent.saturating_add(options.period_ms);
        }
    }

    log::debug!("replayed {} segments, {} events", segments.len(), events.len());
    Ok(events)
}
