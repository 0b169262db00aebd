//! Automatic headlight control and the high-beam gate.
//!
//! ```text
//!   engine off ─────────────────────────────▶ low beams OFF
//!   engine on ─┬─ mode On   ────────────────▶ low beams ON
//!              ├─ mode Off  ────────────────▶ low beams OFF
//!              └─ mode Auto ─┬─ Dusk     ──▶ ON  after on_delay
//!                            ├─ Between  ──▶ hold, timer := 0
//!                            └─ Daylight ──▶ OFF after off_delay
//! ```
//!
//! The delay timer is shared between the two directions.  Moving straight
//! from Dusk to Daylight (or back) keeps the accumulated time; only the
//! Between zone clears it.  Leaving Auto (engine off or a manual mode) also
//! clears it, so a dwell only counts while Auto observes it.

use log::debug;

use crate::config::SystemConfig;
use crate::control::bands::{HeadlightMode, LightLevelZone};

/// Result of one headlight tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlightStatus {
    pub low_beam_on: bool,
    /// Selector position; `None` while the engine is off.
    pub mode: Option<HeadlightMode>,
    pub zone: LightLevelZone,
    pub delay_timer_ms: u32,
}

/// High beams follow the switch only while low beams are lit.
pub fn high_beam_gate(low_beam_on: bool, high_beam_switch: bool) -> bool {
    low_beam_on && high_beam_switch
}

pub struct HeadlightController {
    low_beam_on: bool,
    delay_timer_ms: u32,
    tick_period_ms: u32,
    on_delay_ms: u32,
    off_delay_ms: u32,
    dusk_threshold: f32,
    daylight_threshold: f32,
    mode_on_max: f32,
    mode_off_max: f32,
}

impl HeadlightController {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            low_beam_on: false,
            delay_timer_ms: 0,
            tick_period_ms: config.tick_period_ms,
            on_delay_ms: config.headlight_on_delay_ms,
            off_delay_ms: config.headlight_off_delay_ms,
            dusk_threshold: config.dusk_threshold,
            daylight_threshold: config.daylight_threshold,
            mode_on_max: config.mode_on_max,
            mode_off_max: config.mode_off_max,
        }
    }

    /// Run one tick.  Readings are clamped to `[0, 1]` before banding.
    pub fn update(
        &mut self,
        engine_running: bool,
        mode_reading: f32,
        light_reading: f32,
    ) -> HeadlightStatus {
        let zone = LightLevelZone::classify(
            normalise(light_reading),
            self.dusk_threshold,
            self.daylight_threshold,
        );

        let mode = engine_running.then(|| {
            HeadlightMode::classify(normalise(mode_reading), self.mode_on_max, self.mode_off_max)
        });

        match mode {
            None | Some(HeadlightMode::Off) => self.hold_manual(false),
            Some(HeadlightMode::On) => self.hold_manual(true),
            Some(HeadlightMode::Auto) => self.auto_step(zone),
        }

        HeadlightStatus {
            low_beam_on: self.low_beam_on,
            mode,
            zone,
            delay_timer_ms: self.delay_timer_ms,
        }
    }

    fn hold_manual(&mut self, on: bool) {
        self.low_beam_on = on;
        self.delay_timer_ms = 0;
    }

    fn auto_step(&mut self, zone: LightLevelZone) {
        match zone {
            LightLevelZone::Dusk => {
                self.delay_timer_ms = self.delay_timer_ms.saturating_add(self.tick_period_ms);
                if !self.low_beam_on && self.delay_timer_ms >= self.on_delay_ms {
                    debug!("headlight: dusk held {} ms, low beams on", self.delay_timer_ms);
                    self.low_beam_on = true;
                }
            }
            LightLevelZone::Between => self.delay_timer_ms = 0,
            LightLevelZone::Daylight => {
                self.delay_timer_ms = self.delay_timer_ms.saturating_add(self.tick_period_ms);
                if self.low_beam_on && self.delay_timer_ms >= self.off_delay_ms {
                    debug!("headlight: daylight held {} ms, low beams off", self.delay_timer_ms);
                    self.low_beam_on = false;
                }
            }
        }
    }

    pub fn low_beam_on(&self) -> bool {
        self.low_beam_on
    }

    pub fn delay_timer_ms(&self) -> u32 {
        self.delay_timer_ms
    }
}

fn normalise(reading: f32) -> f32 {
    if reading.is_nan() { 0.0 } else { reading.clamp(0.0, 1.0) }
}
