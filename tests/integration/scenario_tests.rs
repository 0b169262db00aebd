//! End-to-end driving scenarios through the full service.
//!
//! Tick numbers are 1-based and count from the first `tick()` after
//! `start()`.  The default configuration runs 10 ms ticks.

use autolight::app::events::AppEvent;
use autolight::config::SystemConfig;
use autolight::control::ignition::IgnoreReason;

use crate::mock_hw::Rig;

const AUTO: f32 = 0.9;
const MANUAL_ON: f32 = 0.1;
const TWILIGHT: f32 = 0.7;
const DARK: f32 = 0.5;

fn rig_with_hold(hold_ms: u32) -> Rig {
    Rig::new(SystemConfig {
        ignition_hold_ms: hold_ms,
        ..Default::default()
    })
}

/// Seat occupied, one idle tick, then a 50 ms press and 50 ms release.
/// The engine starts on tick 11.
fn start_engine(rig: &mut Rig) {
    rig.hw.inputs.seat_occupied = true;
    rig.run(1);
    rig.press_and_release(5);
    assert!(rig.app.engine_running());
}

#[test]
fn release_fires_when_rising_window_reaches_settle_time() {
    let mut rig = rig_with_hold(0);
    start_engine(&mut rig);
    // Press seen on tick 2, Down on tick 6, release entered on tick 7,
    // 40 ms accumulated on tick 11.
    assert_eq!(rig.sink.engine_changes(), vec![(11, true)]);
}

#[test]
fn empty_seat_keeps_engine_off() {
    let mut rig = rig_with_hold(0);
    rig.run(1);
    rig.press_and_release(5);

    assert!(!rig.app.engine_running());
    assert!(rig.sink.engine_changes().is_empty());
    assert!(rig.sink.events.contains(&AppEvent::IgnitionIgnored {
        reason: IgnoreReason::SeatEmpty,
        tick: 11,
    }));
}

#[test]
fn engine_stops_with_the_seat_empty() {
    let mut rig = rig_with_hold(40);
    start_engine(&mut rig);
    rig.hw.inputs.seat_occupied = false;
    rig.press_and_release(5);
    assert!(!rig.app.engine_running());
    assert_eq!(rig.sink.engine_changes(), vec![(11, true), (21, false)]);
}

#[test]
fn quick_second_release_is_held_off() {
    let mut rig = rig_with_hold(500);
    rig.run(60);
    rig.hw.inputs.seat_occupied = true;
    rig.press_and_release(5);
    assert!(rig.app.engine_running());

    // 100 ms later: well inside the 500 ms hold.
    rig.press_and_release(5);
    assert!(rig.app.engine_running());
    assert_eq!(
        rig.sink.count(|e| matches!(
            e,
            AppEvent::IgnitionIgnored { reason: IgnoreReason::HoldPending, .. }
        )),
        1
    );

    // After the hold has elapsed the next release stops the engine.
    rig.run(50);
    rig.press_and_release(5);
    assert!(!rig.app.engine_running());
}

#[test]
fn bouncy_press_starts_the_engine_once() {
    let mut rig = rig_with_hold(0);
    rig.hw.inputs.seat_occupied = true;
    rig.run(1);
    // Chatter shorter than the settle window, then a clean press.
    for level in [true, false, true, false] {
        rig.hw.inputs.ignition_pressed = level;
        rig.run(1);
    }
    rig.press_and_release(8);
    assert_eq!(rig.sink.engine_changes().len(), 1);
}

#[test]
fn dusk_turns_on_low_beams_after_one_second() {
    let mut rig = rig_with_hold(0);
    rig.hw.inputs.mode_reading = AUTO;
    rig.hw.inputs.light_reading = TWILIGHT;
    start_engine(&mut rig);

    rig.hw.inputs.light_reading = DARK;
    rig.run(99);
    assert!(!rig.hw.last_outputs().low_beams());
    rig.run(1);
    assert!(rig.hw.last_outputs().low_beams());
    assert!(rig.hw.last_outputs().right_low_beam);
    // Dark from tick 12; 1000 ms accumulated on tick 111.
    assert_eq!(rig.sink.low_beam_changes(), vec![(111, true)]);
}

#[test]
fn brief_dusk_never_turns_on_low_beams() {
    let mut rig = rig_with_hold(0);
    rig.hw.inputs.mode_reading = AUTO;
    rig.hw.inputs.light_reading = TWILIGHT;
    start_engine(&mut rig);

    for _ in 0..3 {
        rig.hw.inputs.light_reading = DARK;
        rig.run(90);
        rig.hw.inputs.light_reading = TWILIGHT;
        rig.run(1);
    }
    assert!(rig.sink.low_beam_changes().is_empty());
}

#[test]
fn high_beams_follow_switch_only_with_low_beams() {
    let mut rig = rig_with_hold(0);
    rig.hw.inputs.high_beam_switch = true;
    rig.hw.inputs.mode_reading = 0.5;
    start_engine(&mut rig);
    rig.run(10);
    assert!(!rig.hw.last_outputs().high_beams());

    rig.hw.inputs.mode_reading = MANUAL_ON;
    rig.run(1);
    let out = rig.hw.last_outputs();
    assert!(out.low_beams() && out.high_beams());
    assert!(out.left_high_beam && out.right_high_beam);

    rig.hw.inputs.high_beam_switch = false;
    rig.run(1);
    assert!(!rig.hw.last_outputs().high_beams());
}

#[test]
fn stopping_the_engine_darkens_everything() {
    let mut rig = rig_with_hold(0);
    rig.hw.inputs.high_beam_switch = true;
    rig.hw.inputs.mode_reading = MANUAL_ON;
    start_engine(&mut rig);
    assert!(rig.hw.last_outputs().high_beams());

    rig.press_and_release(5);
    let out = rig.hw.last_outputs();
    assert!(!out.engine_running);
    assert!(!out.low_beams());
    assert!(!out.high_beams());
    assert!(rig.sink.events.contains(&AppEvent::HighBeamsChanged { on: false, tick: 21 }));
}
