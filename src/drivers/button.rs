//! Polled, debounced ignition button.
//!
//! ## Hardware
//!
//! Momentary push-button with pull-down; HIGH while pressed.  The input is
//! sampled once per control tick, never from an interrupt.
//!
//! ## Edge detection
//!
//! | Transition        | Condition                               | Result        |
//! |-------------------|-----------------------------------------|---------------|
//! | Up → Down         | HIGH at the end of the settle window    | none          |
//! | Down → Up         | LOW at the end of the settle window     | release event |
//! | Down → Down       | HIGH again at the end of the window     | bounce        |
//!
//! Exactly one release event is reported per confirmed press/release cycle.

use log::debug;

use crate::fsm::context::DebounceContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{ButtonState, Fsm};

pub struct DebouncedButton {
    fsm: Fsm,
    ctx: DebounceContext,
}

impl DebouncedButton {
    /// A button sampled every `tick_period_ms` whose edges must hold for
    /// `settle_ms`.  The first [`update`](Self::update) derives the state.
    pub fn new(tick_period_ms: u32, settle_ms: u32) -> Self {
        Self {
            fsm: Fsm::new(build_state_table()),
            ctx: DebounceContext::new(tick_period_ms, settle_ms),
        }
    }

    /// Feed this tick's raw sample.  Returns `true` on the tick a release
    /// is confirmed.
    pub fn update(&mut self, raw_pressed: bool) -> bool {
        self.ctx.raw_pressed = raw_pressed;
        self.ctx.released = false;
        self.fsm.tick(&mut self.ctx);

        if self.ctx.released {
            debug!("ignition button released");
        }
        self.ctx.released
    }

    /// Current debounce state, `None` before the first sample.
    pub fn state(&self) -> Option<ButtonState> {
        self.fsm.current_state()
    }

    /// Milliseconds spent in the current debounce window.
    pub fn timer_ms(&self) -> u32 {
        self.ctx.timer_ms
    }

    /// Restore a raw state byte; unknown values force re-derivation.
    pub fn load_state(&mut self, raw: u8) {
        self.fsm.load_state(raw);
        self.ctx.timer_ms = 0;
    }
}
