//! Mock hardware adapter for integration tests.
//!
//! Serves a scripted [`InputSnapshot`] and records every actuator call so
//! tests can assert on the full output history without touching GPIO.

use autolight::app::context::{InputSnapshot, OutputState};
use autolight::app::events::AppEvent;
use autolight::app::ports::{ActuatorPort, EventSink, SensorPort};
use autolight::app::service::AppService;
use autolight::config::SystemConfig;
use autolight::error::{ActuatorError, SensorError};

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub inputs: InputSnapshot,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub applied: Vec<OutputState>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_outputs(&self) -> OutputState {
        self.applied.last().copied().unwrap_or_default()
    }
}

impl SensorPort for MockHardware {
    fn read_inputs(&mut self) -> Result<InputSnapshot, SensorError> {
        if self.fail_reads {
            return Err(SensorError::GpioReadFailed);
        }
        Ok(self.inputs)
    }
}

impl ActuatorPort for MockHardware {
    fn apply(&mut self, outputs: &OutputState) -> Result<(), ActuatorError> {
        if self.fail_writes {
            return Err(ActuatorError::GpioWriteFailed);
        }
        self.applied.push(*outputs);
        Ok(())
    }
}

// ── Event capture ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks on which the engine changed, with the new state.
    pub fn engine_changes(&self) -> Vec<(u64, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::EngineChanged { running, tick } => Some((*tick, *running)),
                _ => None,
            })
            .collect()
    }

    /// Ticks on which low beams changed, with the new state.
    pub fn low_beam_changes(&self) -> Vec<(u64, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::LowBeamsChanged { on, tick } => Some((*tick, *on)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Test rig ──────────────────────────────────────────────────

/// A started service wired to mock hardware.
pub struct Rig {
    pub app: AppService,
    pub hw: MockHardware,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn new(config: SystemConfig) -> Self {
        let mut app = AppService::new(config);
        let mut hw = MockHardware::new();
        let mut sink = RecordingSink::new();
        app.start(&mut hw, &mut sink);
        Self { app, hw, sink }
    }

    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.tick(&mut self.hw, &mut self.sink);
        }
    }

    /// Hold the ignition button for `ticks`, then release for `ticks`.
    pub fn press_and_release(&mut self, ticks: usize) {
        self.hw.inputs.ignition_pressed = true;
        self.run(ticks);
        self.hw.inputs.ignition_pressed = false;
        self.run(ticks);
    }
}
