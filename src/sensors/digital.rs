//! Active-high digital switch input (seat sensor, ignition button,
//! high-beam stalk).
//!
//! Generic over any `embedded_hal` [`InputPin`].  No filtering happens
//! here; the ignition button is debounced further up.

use embedded_hal::digital::InputPin;

use crate::error::SensorError;

pub struct DigitalSensor<P> {
    pin: P,
    last: bool,
}

impl<P: InputPin> DigitalSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, last: false }
    }

    /// `true` while the switch is asserted (pin HIGH).
    pub fn read(&mut self) -> Result<bool, SensorError> {
        self.last = self
            .pin
            .is_high()
            .map_err(|_| SensorError::GpioReadFailed)?;
        Ok(self.last)
    }

    /// Last successful sample.
    pub fn last(&self) -> bool {
        self.last
    }
}
