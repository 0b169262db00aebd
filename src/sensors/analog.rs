//! Potentiometer / light-dependent-resistor input on an ADC1 channel.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the oneshot ADC initialised by hw_init.
//! On host/test: reads the simulated channel set with `sim_set_adc`.

use crate::drivers::hw_init;
use crate::error::SensorError;
use crate::pins::ADC_FULL_SCALE;

/// Map a raw 12-bit count onto `[0, 1]`.
pub fn normalise_counts(raw: u16) -> f32 {
    (f32::from(raw) / f32::from(ADC_FULL_SCALE)).clamp(0.0, 1.0)
}

pub struct AnalogSensor {
    channel: u32,
    last: f32,
}

impl AnalogSensor {
    pub fn new(channel: u32) -> Self {
        Self { channel, last: 0.0 }
    }

    /// Sample the channel, normalised to `[0, 1]`.
    pub fn read(&mut self) -> Result<f32, SensorError> {
        let raw = hw_init::adc1_read(self.channel)?;
        self.last = normalise_counts(raw);
        Ok(self.last)
    }

    /// Last successful sample.
    pub fn last(&self) -> f32 {
        self.last
    }
}
