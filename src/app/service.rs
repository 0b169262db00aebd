//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the ignition and headlight controllers plus the
//! shared context.  It exposes a clean, hardware-agnostic API.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │          AppService           │
//! ActuatorPort ◀──│ Ignition · Headlight · Gate  │
//!                 └──────────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::control::headlight::{HeadlightController, high_beam_gate};
use crate::control::ignition::{IgnitionController, IgnitionOutcome};

use super::context::{ControlContext, OutputState};
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    ctx: ControlContext,
    ignition: IgnitionController,
    headlight: HeadlightController,
    telemetry_every: u64,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from a validated configuration.
    ///
    /// Engine off, all timers zero, button state not yet derived.
    pub fn new(config: SystemConfig) -> Self {
        let ignition = IgnitionController::new(&config);
        let headlight = HeadlightController::new(&config);
        let telemetry_every = config.telemetry_interval_ticks().max(1);

        Self {
            ctx: ControlContext::new(config),
            ignition,
            headlight,
            telemetry_every,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every output off and announce the start.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.ctx.outputs = OutputState::default();
        if let Err(e) = hw.apply(&self.ctx.outputs) {
            warn!("Initial output reset failed: {}", e);
            sink.emit(&AppEvent::ActuatorFault(e));
        }
        sink.emit(&AppEvent::Started);
        info!(
            "AppService started (tick {} ms, settle {} ms)",
            self.ctx.config.tick_period_ms, self.ctx.config.debounce_settle_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full polling pass: read inputs → ignition → headlights →
    /// high-beam gate → actuators → events.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`]; this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        self.tick_count += 1;
        let prev = self.ctx.outputs;

        // 1. Inputs; a failed read reuses the last good snapshot
        match hw.read_inputs() {
            Ok(snapshot) => self.ctx.inputs = snapshot,
            Err(e) => {
                warn!("Input read failed, reusing previous sample: {}", e);
                sink.emit(&AppEvent::SensorFault(e));
            }
        }
        let inputs = self.ctx.inputs;

        // 2. Ignition (advances the debounced button)
        let outcome = self
            .ignition
            .update(inputs.seat_occupied, inputs.ignition_pressed);
        let engine_running = self.ignition.engine_running();

        // 3. Low beams, then the high-beam gate on top
        let status = self
            .headlight
            .update(engine_running, inputs.mode_reading, inputs.light_reading);
        let high_beams = high_beam_gate(status.low_beam_on, inputs.high_beam_switch);
        self.ctx.headlight = status;
        self.ctx.outputs = OutputState::new(engine_running, status.low_beam_on, high_beams);

        // 4. Outputs
        if let Err(e) = hw.apply(&self.ctx.outputs) {
            warn!("Output write failed, retrying next tick: {}", e);
            sink.emit(&AppEvent::ActuatorFault(e));
        }

        // 5. Events
        self.emit_transitions(outcome, prev, sink);
        if self.tick_count % self.telemetry_every == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            tick: self.tick_count,
            engine_running: self.ctx.outputs.engine_running,
            low_beams: self.ctx.outputs.low_beams(),
            high_beams: self.ctx.outputs.high_beams(),
            mode: self.ctx.headlight.mode,
            zone: self.ctx.headlight.zone,
            button: self.ignition.button().state(),
            hold_timer_ms: self.ignition.hold_timer_ms(),
            headlight_delay_ms: self.ctx.headlight.delay_timer_ms,
            mode_reading: self.ctx.inputs.mode_reading,
            light_reading: self.ctx.inputs.light_reading,
            seat_occupied: self.ctx.inputs.seat_occupied,
        }
    }

    /// Outputs commanded on the last tick.
    pub fn outputs(&self) -> OutputState {
        self.ctx.outputs
    }

    pub fn engine_running(&self) -> bool {
        self.ignition.engine_running()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SystemConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_transitions(
        &self,
        outcome: IgnitionOutcome,
        prev: OutputState,
        sink: &mut impl EventSink,
    ) {
        let tick = self.tick_count;
        let now = self.ctx.outputs;

        match outcome {
            IgnitionOutcome::Started | IgnitionOutcome::Stopped => {
                sink.emit(&AppEvent::EngineChanged {
                    running: now.engine_running,
                    tick,
                });
            }
            IgnitionOutcome::Ignored(reason) => {
                sink.emit(&AppEvent::IgnitionIgnored { reason, tick });
            }
            IgnitionOutcome::Idle => {}
        }

        if now.low_beams() != prev.low_beams() {
            sink.emit(&AppEvent::LowBeamsChanged {
                on: now.low_beams(),
                tick,
            });
        }
        if now.high_beams() != prev.high_beams() {
            sink.emit(&AppEvent::HighBeamsChanged {
                on: now.high_beams(),
                tick,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::context::InputSnapshot;
    use crate::error::{ActuatorError, SensorError};

    #[derive(Default)]
    struct Bench {
        inputs: InputSnapshot,
        fail_reads: bool,
        applied: Vec<OutputState>,
    }

    impl SensorPort for Bench {
        fn read_inputs(&mut self) -> Result<InputSnapshot, SensorError> {
            if self.fail_reads {
                Err(SensorError::AdcReadFailed)
            } else {
                Ok(self.inputs)
            }
        }
    }

    impl ActuatorPort for Bench {
        fn apply(&mut self, outputs: &OutputState) -> Result<(), ActuatorError> {
            self.applied.push(*outputs);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Events(Vec<AppEvent>);

    impl EventSink for Events {
        fn emit(&mut self, event: &AppEvent) {
            self.0.push(event.clone());
        }
    }

    #[test]
    fn start_drives_everything_off() {
        let mut app = AppService::new(SystemConfig::default());
        let mut hw = Bench::default();
        let mut events = Events::default();
        app.start(&mut hw, &mut events);
        assert_eq!(hw.applied, vec![OutputState::default()]);
        assert_eq!(events.0, vec![AppEvent::Started]);
    }

    #[test]
    fn telemetry_fires_on_interval() {
        let mut app = AppService::new(SystemConfig::default());
        let mut hw = Bench::default();
        let mut events = Events::default();
        for _ in 0..250 {
            app.tick(&mut hw, &mut events);
        }
        let ticks: Vec<u64> = events
            .0
            .iter()
            .filter_map(|e| match e {
                AppEvent::Telemetry(t) => Some(t.tick),
                _ => None,
            })
            .collect();
        assert_eq!(ticks, vec![100, 200]);
    }

    #[test]
    fn failed_read_keeps_previous_inputs() {
        let mut app = AppService::new(SystemConfig::default());
        let mut hw = Bench::default();
        let mut events = Events::default();
        hw.inputs.seat_occupied = true;
        app.tick(&mut hw, &mut events);

        hw.fail_reads = true;
        hw.inputs.seat_occupied = false;
        app.tick(&mut hw, &mut events);

        assert!(app.build_telemetry().seat_occupied);
        assert!(events.0.contains(&AppEvent::SensorFault(SensorError::AdcReadFailed)));
        assert_eq!(hw.applied.len(), 2);
    }
}
