//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and every lamp driver, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets the
//! underlying pins are the hw_init simulation.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::context::{InputSnapshot, OutputState};
use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::hw_init::{GpioInput, GpioOutput};
use crate::drivers::lamp::LampDriver;
use crate::error::{ActuatorError, SensorError};
use crate::pins;
use crate::sensors::SensorHub;
use crate::sensors::analog::AnalogSensor;
use crate::sensors::digital::DigitalSensor;

/// The five outputs, one driver each.
pub struct Lamps<O> {
    pub left_low: LampDriver<O>,
    pub right_low: LampDriver<O>,
    pub left_high: LampDriver<O>,
    pub right_high: LampDriver<O>,
    pub engine: LampDriver<O>,
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, O> {
    sensor_hub: SensorHub<I>,
    lamps: Lamps<O>,
}

impl<I: InputPin, O: OutputPin> HardwareAdapter<I, O> {
    pub fn new(sensor_hub: SensorHub<I>, lamps: Lamps<O>) -> Self {
        Self { sensor_hub, lamps }
    }
}

impl HardwareAdapter<GpioInput, GpioOutput> {
    /// Build the adapter over the board pin map.  Call after
    /// [`init_peripherals`](crate::drivers::hw_init::init_peripherals).
    pub fn from_pin_map() -> Self {
        let input = |pin| DigitalSensor::new(GpioInput::new(pin));
        let lamp = |pin, name| LampDriver::new(GpioOutput::new(pin), name);

        let hub = SensorHub::new(
            input(pins::DRIVER_SEAT_GPIO),
            input(pins::IGNITION_GPIO),
            input(pins::HIGH_BEAM_SWITCH_GPIO),
            AnalogSensor::new(pins::ADC1_CH_HEADLIGHT_MODE),
            AnalogSensor::new(pins::ADC1_CH_LIGHT_SENSOR),
        );
        let lamps = Lamps {
            left_low: lamp(pins::LEFT_LOW_BEAM_GPIO, "left low"),
            right_low: lamp(pins::RIGHT_LOW_BEAM_GPIO, "right low"),
            left_high: lamp(pins::LEFT_HIGH_BEAM_GPIO, "left high"),
            right_high: lamp(pins::RIGHT_HIGH_BEAM_GPIO, "right high"),
            engine: lamp(pins::ENGINE_GPIO, "engine"),
        };
        Self::new(hub, lamps)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> SensorPort for HardwareAdapter<I, O> {
    fn read_inputs(&mut self) -> Result<InputSnapshot, SensorError> {
        self.sensor_hub.read_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I: InputPin, O: OutputPin> ActuatorPort for HardwareAdapter<I, O> {
    fn apply(&mut self, outputs: &OutputState) -> Result<(), ActuatorError> {
        // Attempt every pin even if one fails; report the first failure.
        let results = [
            self.lamps.left_low.set(outputs.left_low_beam),
            self.lamps.right_low.set(outputs.right_low_beam),
            self.lamps.left_high.set(outputs.left_high_beam),
            self.lamps.right_high.set(outputs.right_high_beam),
            self.lamps.engine.set(outputs.engine_running),
        ];
        results.into_iter().collect()
    }
}
