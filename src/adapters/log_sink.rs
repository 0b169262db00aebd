//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | tick={} | engine={} seat={} | low={} high={} | \
                     mode={:?} ({:.2}) zone={:?} ({:.2}) | button={:?} | \
                     hold={}ms delay={}ms",
                    t.tick,
                    on_off(t.engine_running),
                    if t.seat_occupied { "occupied" } else { "empty" },
                    on_off(t.low_beams),
                    on_off(t.high_beams),
                    t.mode,
                    t.mode_reading,
                    t.zone,
                    t.light_reading,
                    t.button,
                    t.hold_timer_ms,
                    t.headlight_delay_ms,
                );
            }
            AppEvent::EngineChanged { running, tick } => {
                info!("ENGINE | {} @ tick {}", if *running { "started" } else { "stopped" }, tick);
            }
            AppEvent::IgnitionIgnored { reason, tick } => {
                info!("ENGINE | release ignored ({:?}) @ tick {}", reason, tick);
            }
            AppEvent::LowBeamsChanged { on, tick } => {
                info!("BEAMS | low {} @ tick {}", on_off(*on), tick);
            }
            AppEvent::HighBeamsChanged { on, tick } => {
                info!("BEAMS | high {} @ tick {}", on_off(*on), tick);
            }
            AppEvent::SensorFault(e) => {
                warn!("FAULT | {}", e);
            }
            AppEvent::ActuatorFault(e) => {
                warn!("FAULT | {}", e);
            }
            AppEvent::Started => {
                info!("START | engine off, all beams off");
            }
        }
    }
}
