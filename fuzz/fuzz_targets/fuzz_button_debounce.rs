//! Fuzz target: debounced ignition button
//!
//! Each input byte is one tick: bit 0 is the raw ignition level, and a
//! byte of 0xFF reloads a corrupt state byte instead.  Verifies:
//! - No panics under arbitrary sample streams
//! - The debounce timer is zero outside the transient states
//! - Between corruptions, releases are at least two settle windows apart
//!
//! cargo fuzz run fuzz_button_debounce

#![no_main]

use autolight::drivers::button::DebouncedButton;
use libfuzzer_sys::fuzz_target;

const TICK_MS: u32 = 10;
const SETTLE_MS: u32 = 40;

fuzz_target!(|data: &[u8]| {
    let mut btn = DebouncedButton::new(TICK_MS, SETTLE_MS);
    let mut last_release: Option<usize> = None;

    for (tick, &byte) in data.iter().enumerate() {
        if byte == 0xFF {
            btn.load_state(byte);
            // Re-derivation may land straight in Down.
            last_release = None;
            continue;
        }

        if btn.update(byte & 1 != 0) {
            if let Some(prev) = last_release {
                // Falling window, Down, then the rising window.
                assert!(tick - prev >= 2 * (SETTLE_MS / TICK_MS) as usize + 1);
            }
            last_release = Some(tick);
        }

        let state = btn.state().expect("state derived after first update");
        if !state.is_debouncing() {
            assert_eq!(btn.timer_ms(), 0);
        }
    }
});
