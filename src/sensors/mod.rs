//! Sensor subsystem: individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every input and produces an
//! [`InputSnapshot`](crate::app::context::InputSnapshot) each tick.

pub mod analog;
pub mod digital;

use embedded_hal::digital::InputPin;

use crate::app::context::InputSnapshot;
use crate::error::SensorError;
use analog::AnalogSensor;
use digital::DigitalSensor;

/// Aggregates all input drivers and produces a unified snapshot.
pub struct SensorHub<P> {
    pub seat: DigitalSensor<P>,
    pub ignition: DigitalSensor<P>,
    pub high_beam_switch: DigitalSensor<P>,
    pub mode_selector: AnalogSensor,
    pub light: AnalogSensor,
}

impl<P: InputPin> SensorHub<P> {
    /// Construct a new hub from pre-built drivers (built in main where
    /// the pin map is established).
    pub fn new(
        seat: DigitalSensor<P>,
        ignition: DigitalSensor<P>,
        high_beam_switch: DigitalSensor<P>,
        mode_selector: AnalogSensor,
        light: AnalogSensor,
    ) -> Self {
        Self {
            seat,
            ignition,
            high_beam_switch,
            mode_selector,
            light,
        }
    }

    /// Read every input.  The first failing input aborts the snapshot;
    /// the caller keeps its previous one.
    pub fn read_all(&mut self) -> Result<InputSnapshot, SensorError> {
        Ok(InputSnapshot {
            seat_occupied: self.seat.read()?,
            ignition_pressed: self.ignition.read()?,
            mode_reading: self.mode_selector.read()?,
            light_reading: self.light.read()?,
            high_beam_switch: self.high_beam_switch.read()?,
        })
    }
}
