//! System configuration parameters
//!
//! All timing and threshold constants for the lighting controller.  Values
//! are fixed once the [`AppService`](crate::app::service::AppService) is
//! built; a JSON override can be baked into the firmware image at compile
//! time.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{self, ConfigError};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Logical duration of one control tick (milliseconds)
    pub tick_period_ms: u32,
    /// Telemetry report interval (milliseconds)
    pub telemetry_interval_ms: u32,

    // --- Ignition ---
    /// Time the ignition input must stay stable before an edge is accepted
    pub debounce_settle_ms: u32,
    /// Minimum time between two engine state changes
    pub ignition_hold_ms: u32,

    // --- Headlights ---
    /// Continuous dusk time before automatic low beams switch on
    pub headlight_on_delay_ms: u32,
    /// Continuous daylight time before automatic low beams switch off
    pub headlight_off_delay_ms: u32,
    /// Normalised light level at or below which it is dusk
    pub dusk_threshold: f32,
    /// Normalised light level above which it is daylight
    pub daylight_threshold: f32,

    // --- Mode selector bands ---
    /// Upper bound of the manual "on" band
    pub mode_on_max: f32,
    /// Upper bound of the manual "off" band; above it is automatic
    pub mode_off_max: f32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            tick_period_ms: 10,           // 100 Hz
            telemetry_interval_ms: 1_000, // 1 Hz

            // Ignition
            debounce_settle_ms: 40,
            ignition_hold_ms: 40,

            // Headlights
            headlight_on_delay_ms: 1_000,
            headlight_off_delay_ms: 2_000,
            dusk_threshold: 0.636,
            daylight_threshold: 0.828,

            // Mode selector, equal thirds
            mode_on_max: 1.0 / 3.0,
            mode_off_max: 2.0 / 3.0,
        }
    }
}

impl SystemConfig {
    /// Check every field for range and ordering problems.
    ///
    /// Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_period_ms must be > 0"));
        }
        if self.telemetry_interval_ms < self.tick_period_ms {
            return Err(ConfigError::ValidationFailed(
                "telemetry_interval_ms must be >= tick_period_ms",
            ));
        }
        let unit = 0.0_f32..=1.0;
        if !unit.contains(&self.dusk_threshold) || !unit.contains(&self.daylight_threshold) {
            return Err(ConfigError::ValidationFailed(
                "light thresholds must lie in [0, 1]",
            ));
        }
        if self.dusk_threshold >= self.daylight_threshold {
            return Err(ConfigError::ValidationFailed(
                "dusk_threshold must be below daylight_threshold",
            ));
        }
        if !unit.contains(&self.mode_on_max) || !unit.contains(&self.mode_off_max) {
            return Err(ConfigError::ValidationFailed("mode bands must lie in [0, 1]"));
        }
        if self.mode_on_max >= self.mode_off_max {
            return Err(ConfigError::ValidationFailed(
                "mode_on_max must be below mode_off_max",
            ));
        }
        Ok(())
    }

    /// Parse a JSON blob and validate it.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Pick the configuration to run with: the JSON override if one was
    /// supplied, otherwise the defaults.  A bad override is an error.
    pub fn resolve(override_json: Option<&str>) -> error::Result<Self> {
        let Some(json) = override_json else {
            return Ok(Self::default());
        };
        let config = Self::from_json(json.as_bytes())?;
        info!("Config override applied");
        Ok(config)
    }

    /// Number of ticks in one telemetry interval (at least one).
    pub fn telemetry_interval_ticks(&self) -> u64 {
        u64::from((self.telemetry_interval_ms / self.tick_period_ms.max(1)).max(1))
    }
}
