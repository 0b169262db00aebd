//! Concrete debounce state handlers and table builder.
//!
//! ```text
//!          raw=1                 settled, raw=1
//!   UP ───────────▶ FALLING ─────────────────▶ DOWN
//!    ▲                 │                         │
//!    │  settled, raw=0 │                   raw=0 │
//!    └─────────────────┘                         ▼
//!    ▲                                        RISING
//!    │        settled, raw=0 (release)           │
//!    └───────────────────────────────────────────┤
//!                    settled, raw=1 ──▶ DOWN ◀───┘
//! ```
//!
//! The debounce timer is zeroed on entry to every state, so it is only
//! ever non-zero inside FALLING or RISING.

use super::context::DebounceContext;
use super::{ButtonState, StateDescriptor};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.
pub fn build_state_table() -> [StateDescriptor; ButtonState::COUNT] {
    [
        // Index 0: Up
        StateDescriptor {
            id: ButtonState::Up,
            name: "Up",
            on_enter: Some(reset_timer),
            on_update: up_update,
        },
        // Index 1: FallingDebounce
        StateDescriptor {
            id: ButtonState::FallingDebounce,
            name: "FallingDebounce",
            on_enter: Some(reset_timer),
            on_update: falling_update,
        },
        // Index 2: Down
        StateDescriptor {
            id: ButtonState::Down,
            name: "Down",
            on_enter: Some(reset_timer),
            on_update: down_update,
        },
        // Index 3: RisingDebounce
        StateDescriptor {
            id: ButtonState::RisingDebounce,
            name: "RisingDebounce",
            on_enter: Some(reset_timer),
            on_update: rising_update,
        },
    ]
}

fn reset_timer(ctx: &mut DebounceContext) {
    ctx.timer_ms = 0;
}

// ═══════════════════════════════════════════════════════════════════════════
//  UP / DOWN (stable)
// ═══════════════════════════════════════════════════════════════════════════

fn up_update(ctx: &mut DebounceContext) -> Option<ButtonState> {
    ctx.raw_pressed.then_some(ButtonState::FallingDebounce)
}

fn down_update(ctx: &mut DebounceContext) -> Option<ButtonState> {
    (!ctx.raw_pressed).then_some(ButtonState::RisingDebounce)
}

// ═══════════════════════════════════════════════════════════════════════════
//  FALLING / RISING (transient)
// ═══════════════════════════════════════════════════════════════════════════

// Both transient states accumulate first and sample the input only once the
// window is covered; what happens in between is ignored.

fn falling_update(ctx: &mut DebounceContext) -> Option<ButtonState> {
    ctx.accumulate();
    if !ctx.settled() {
        return None;
    }
    Some(ButtonState::stable_for(ctx.raw_pressed))
}

fn rising_update(ctx: &mut DebounceContext) -> Option<ButtonState> {
    ctx.accumulate();
    if !ctx.settled() {
        return None;
    }
    if ctx.raw_pressed {
        // Bounce: the release did not hold.
        Some(ButtonState::Down)
    } else {
        ctx.released = true;
        Some(ButtonState::Up)
    }
}
