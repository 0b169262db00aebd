//! Function-pointer finite state machine engine for the ignition button.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  StateTable                                                │
//! │  ┌─────────────────┬───────────┬──────────────────────┐    │
//! │  │ ButtonState     │ on_enter  │ on_update            │    │
//! │  ├─────────────────┼───────────┼──────────────────────┤    │
//! │  │ Up              │ fn(ctx)   │ fn(ctx)->Option<>    │    │
//! │  │ FallingDebounce │ fn(ctx)   │ fn(ctx)->Option<>    │    │
//! │  │ Down            │ fn(ctx)   │ fn(ctx)->Option<>    │    │
//! │  │ RisingDebounce  │ fn(ctx)   │ fn(ctx)->Option<>    │    │
//! │  └─────────────────┴───────────┴──────────────────────┘    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** state.
//! If it returns `Some(next)`, the engine moves the current pointer and runs
//! `on_enter` for the next state.
//!
//! The engine may also hold **no** state: at power-up, or after a stored
//! state byte failed to decode.  The next tick then derives `Up` or `Down`
//! straight from the raw sample, without reporting a release.

pub mod context;
pub mod states;

use context::DebounceContext;
use log::{debug, warn};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Debounce states of the ignition button.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ButtonState {
    Up = 0,
    FallingDebounce = 1,
    Down = 2,
    RisingDebounce = 3,
}

impl ButtonState {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 4;

    /// Decode a state byte.  Unknown values yield `None`.
    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Up),
            1 => Some(Self::FallingDebounce),
            2 => Some(Self::Down),
            3 => Some(Self::RisingDebounce),
            _ => None,
        }
    }

    /// The stable state matching a raw sample.
    pub fn stable_for(raw_pressed: bool) -> Self {
        if raw_pressed { Self::Down } else { Self::Up }
    }

    /// `true` for the two transient debounce states.
    pub fn is_debouncing(self) -> bool {
        matches!(self, Self::FallingDebounce | Self::RisingDebounce)
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut DebounceContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut DebounceContext) -> Option<ButtonState>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: ButtonState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
pub struct Fsm {
    /// Fixed-size table indexed by `ButtonState as usize`.
    table: [StateDescriptor; ButtonState::COUNT],
    /// Currently active state; `None` until derived from the input.
    current: Option<ButtonState>,
}

impl Fsm {
    /// Construct an engine with no current state.
    pub fn new(table: [StateDescriptor; ButtonState::COUNT]) -> Self {
        Self {
            table,
            current: None,
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. With no current state, derive one from `ctx.raw_pressed`.
    /// 2. Otherwise call `on_update` for the current state.
    /// 3. If it returns `Some(next)`, update the pointer and run
    ///    `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut DebounceContext) {
        let Some(current) = self.current else {
            self.derive(ctx);
            return;
        };

        let next = (self.table[current as usize].on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// Load a raw state byte, e.g. one captured before a soft reset.
    ///
    /// An unknown byte leaves the engine without a state; the next tick
    /// re-derives it from the input.
    pub fn load_state(&mut self, raw: u8) {
        self.current = ButtonState::from_index(raw);
        if self.current.is_none() {
            warn!("button FSM: invalid state byte {raw}, re-deriving on next tick");
        }
    }

    /// The current state's identity, if one has been established.
    pub fn current_state(&self) -> Option<ButtonState> {
        self.current
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn derive(&mut self, ctx: &mut DebounceContext) {
        let derived = ButtonState::stable_for(ctx.raw_pressed);
        debug!(
            "button FSM: derived {} from raw input",
            self.table[derived as usize].name
        );
        self.enter(derived, ctx);
    }

    fn transition(&mut self, next_id: ButtonState, ctx: &mut DebounceContext) {
        if let Some(current) = self.current {
            debug!(
                "button FSM: {} -> {}",
                self.table[current as usize].name, self.table[next_id as usize].name
            );
        }
        self.enter(next_id, ctx);
    }

    fn enter(&mut self, next_id: ButtonState, ctx: &mut DebounceContext) {
        self.current = Some(next_id);

        if let Some(enter) = self.table[next_id as usize].on_enter {
            enter(ctx);
        }
    }
}
