//! Engine start/stop control.
//!
//! The controller owns the debounced ignition button and advances it once
//! per tick.  A confirmed release toggles the engine, subject to two gates:
//!
//! - starting requires an occupied driver seat;
//! - any change requires the hold timer to have covered `ignition_hold_ms`
//!   since the previous change.
//!
//! The hold timer is independent of the button debounce: the button only
//! guarantees clean edges, the hold timer paces the engine state changes.

use log::{debug, info};

use crate::config::SystemConfig;
use crate::drivers::button::DebouncedButton;

/// Why a confirmed release left the engine state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Start requested with nobody in the driver seat.
    SeatEmpty,
    /// The previous engine change is too recent.
    HoldPending,
}

/// Result of one ignition tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnitionOutcome {
    /// No release this tick.
    Idle,
    Started,
    Stopped,
    /// A release arrived but was not acted on.
    Ignored(IgnoreReason),
}

/// Engine state after one tick, as a pure function of its inputs.
pub fn next_engine_state(
    seat_occupied: bool,
    engine_running: bool,
    release_event: bool,
    hold_timer_ms: u32,
    hold_ms: u32,
) -> bool {
    let may_change = release_event && hold_timer_ms >= hold_ms;
    if engine_running {
        !may_change
    } else {
        may_change && seat_occupied
    }
}

pub struct IgnitionController {
    button: DebouncedButton,
    engine_running: bool,
    hold_timer_ms: u32,
    hold_ms: u32,
    tick_period_ms: u32,
}

impl IgnitionController {
    /// Engine off, timers at zero.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            button: DebouncedButton::new(config.tick_period_ms, config.debounce_settle_ms),
            engine_running: false,
            hold_timer_ms: 0,
            hold_ms: config.ignition_hold_ms,
            tick_period_ms: config.tick_period_ms,
        }
    }

    /// Run one tick: sample the button, maybe toggle the engine, then
    /// advance the hold timer.
    pub fn update(&mut self, seat_occupied: bool, raw_ignition: bool) -> IgnitionOutcome {
        let released = self.button.update(raw_ignition);
        let was_running = self.engine_running;

        self.engine_running = next_engine_state(
            seat_occupied,
            was_running,
            released,
            self.hold_timer_ms,
            self.hold_ms,
        );

        let outcome = match (released, was_running, self.engine_running) {
            (false, _, _) => IgnitionOutcome::Idle,
            (true, false, true) => IgnitionOutcome::Started,
            (true, true, false) => IgnitionOutcome::Stopped,
            (true, _, _) if self.hold_timer_ms < self.hold_ms => {
                IgnitionOutcome::Ignored(IgnoreReason::HoldPending)
            }
            (true, _, _) => IgnitionOutcome::Ignored(IgnoreReason::SeatEmpty),
        };

        match outcome {
            IgnitionOutcome::Started | IgnitionOutcome::Stopped => {
                info!("ignition: {:?}", outcome);
                self.hold_timer_ms = 0;
            }
            IgnitionOutcome::Ignored(reason) => debug!("ignition: release ignored ({:?})", reason),
            IgnitionOutcome::Idle => {}
        }

        self.hold_timer_ms = self.hold_timer_ms.saturating_add(self.tick_period_ms);
        outcome
    }

    pub fn engine_running(&self) -> bool {
        self.engine_running
    }

    /// Milliseconds since the last engine state change (or since startup).
    pub fn hold_timer_ms(&self) -> u32 {
        self.hold_timer_ms
    }

    /// The debounced button this controller samples.
    pub fn button(&self) -> &DebouncedButton {
        &self.button
    }
}
