//! Autolight Firmware: Main Entry Point
//!
//! Hexagonal architecture on a fixed-period polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        LogEventSink        TransitionLog      │
//! │  (Sensor+Actuator)      (EventSink)         (EventSink)        │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Debounce · Ignition · Headlights · High-beam gate     │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use log::info;

use autolight::adapters::hardware::HardwareAdapter;
use autolight::adapters::log_sink::LogEventSink;
use autolight::app::service::AppService;
use autolight::config::SystemConfig;
use autolight::diagnostics::TransitionLog;
use autolight::drivers::hw_init;
use autolight::error::Error;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Autolight v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (build-time override or defaults) ────
    let config = SystemConfig::resolve(option_env!("AUTOLIGHT_CONFIG_JSON"))
        .context("applying AUTOLIGHT_CONFIG_JSON")?;
    let tick_period_ms = config.tick_period_ms;

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals()
        .map_err(Error::from)
        .context("bringing up GPIO and ADC")?;
    let mut hw = HardwareAdapter::from_pin_map();

    // ── 4. Application core ───────────────────────────────────
    let mut sinks = (LogEventSink::new(), TransitionLog::new());
    let mut app = AppService::new(config);
    app.start(&mut hw, &mut sinks);

    // ── 5. Polling loop: one pass per tick ────────────────────
    loop {
        app.tick(&mut hw, &mut sinks);
        FreeRtos::delay_ms(tick_period_ms);
    }
}
