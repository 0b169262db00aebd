//! Mutable context threaded through every debounce state handler.
//!
//! Handlers read the raw input sample for this tick from here and write
//! the debounce timer and the release flag back.  The engine itself never
//! looks inside.

/// Per-tick inputs and accumulated timing for the ignition debounce FSM.
#[derive(Debug, Clone, Copy)]
pub struct DebounceContext {
    // -- Input --
    /// Raw ignition sample for the current tick (`true` = pressed).
    pub raw_pressed: bool,

    // -- Timing --
    /// Milliseconds accumulated since the current state was entered.
    pub timer_ms: u32,
    /// Logical duration of one tick.
    pub tick_period_ms: u32,
    /// Stability window an edge must survive.
    pub settle_ms: u32,

    // -- Output --
    /// Set by the Rising handler when a release is confirmed this tick.
    pub released: bool,
}

impl DebounceContext {
    pub fn new(tick_period_ms: u32, settle_ms: u32) -> Self {
        Self {
            raw_pressed: false,
            timer_ms: 0,
            tick_period_ms,
            settle_ms,
            released: false,
        }
    }

    /// Add one tick to the debounce timer.
    pub fn accumulate(&mut self) {
        self.timer_ms = self.timer_ms.saturating_add(self.tick_period_ms);
    }

    /// `true` once the timer has covered the settle window.
    pub fn settled(&self) -> bool {
        self.timer_ms >= self.settle_ms
    }
}
