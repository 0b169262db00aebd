//! On/off lamp output (low beam, high beam or indicator).
//!
//! Generic over any `embedded_hal` [`OutputPin`], so the same driver runs
//! on [`GpioOutput`](crate::drivers::hw_init::GpioOutput) in firmware and
//! on a recording pin in tests.
//!
//! The pin is only written when the commanded level differs from the last
//! level known to be on the wire.  A failed write forgets that level, so
//! the next command retries unconditionally.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::error::ActuatorError;

pub struct LampDriver<P> {
    pin: P,
    name: &'static str,
    /// Level last written successfully; `None` before the first write or
    /// after a failure.
    level: Option<bool>,
}

impl<P: OutputPin> LampDriver<P> {
    pub fn new(pin: P, name: &'static str) -> Self {
        Self {
            pin,
            name,
            level: None,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        if self.level == Some(on) {
            return Ok(());
        }
        let result = if on { self.pin.set_high() } else { self.pin.set_low() };
        match result {
            Ok(()) => {
                self.level = Some(on);
                Ok(())
            }
            Err(e) => {
                warn!("lamp {}: write failed ({:?})", self.name, e);
                self.level = None;
                Err(ActuatorError::GpioWriteFailed)
            }
        }
    }

    /// `true` only if the lamp is known to be lit.
    pub fn is_on(&self) -> bool {
        self.level == Some(true)
    }
}
