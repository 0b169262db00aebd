//! Per-tick data shared between the service and its ports.

use crate::config::SystemConfig;
use crate::control::bands::LightLevelZone;
use crate::control::headlight::HeadlightStatus;

/// Everything sampled from the vehicle in one tick.
///
/// Analog readings are normalised to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub seat_occupied: bool,
    pub ignition_pressed: bool,
    pub mode_reading: f32,
    pub light_reading: f32,
    pub high_beam_switch: bool,
}

/// Commanded output levels.  Left and right are always driven together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputState {
    pub engine_running: bool,
    pub left_low_beam: bool,
    pub right_low_beam: bool,
    pub left_high_beam: bool,
    pub right_high_beam: bool,
}

impl OutputState {
    pub fn new(engine_running: bool, low_beams: bool, high_beams: bool) -> Self {
        Self {
            engine_running,
            left_low_beam: low_beams,
            right_low_beam: low_beams,
            left_high_beam: high_beams,
            right_high_beam: high_beams,
        }
    }

    pub fn low_beams(&self) -> bool {
        self.left_low_beam
    }

    pub fn high_beams(&self) -> bool {
        self.left_high_beam
    }
}

/// State owned by the polling loop and carried from tick to tick.
#[derive(Debug, Clone)]
pub struct ControlContext {
    pub config: SystemConfig,
    /// Last good input sample.
    pub inputs: InputSnapshot,
    /// Outputs commanded on the last tick.
    pub outputs: OutputState,
    pub headlight: HeadlightStatus,
}

impl ControlContext {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            inputs: InputSnapshot::default(),
            outputs: OutputState::default(),
            headlight: HeadlightStatus {
                low_beam_on: false,
                mode: None,
                zone: LightLevelZone::Dusk,
                delay_timer_ms: 0,
            },
        }
    }
}
