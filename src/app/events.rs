//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.  Every transition carries the tick
//! it happened on.

use crate::control::bands::{HeadlightMode, LightLevelZone};
use crate::control::ignition::IgnoreReason;
use crate::error::{ActuatorError, SensorError};
use crate::fsm::ButtonState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started with every output off.
    Started,

    /// Engine started or stopped by a debounced ignition release.
    EngineChanged { running: bool, tick: u64 },

    /// A debounced release that left the engine as it was.
    IgnitionIgnored { reason: IgnoreReason, tick: u64 },

    LowBeamsChanged { on: bool, tick: u64 },

    HighBeamsChanged { on: bool, tick: u64 },

    /// Inputs could not be read; the previous sample was reused.
    SensorFault(SensorError),

    /// Outputs could not be driven; retried next tick.
    ActuatorFault(ActuatorError),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryData {
    pub tick: u64,
    pub engine_running: bool,
    pub low_beams: bool,
    pub high_beams: bool,
    pub mode: Option<HeadlightMode>,
    pub zone: LightLevelZone,
    pub button: Option<ButtonState>,
    pub hold_timer_ms: u32,
    pub headlight_delay_ms: u32,
    pub mode_reading: f32,
    pub light_reading: f32,
    pub seat_occupied: bool,
}
