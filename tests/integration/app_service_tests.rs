//! Integration tests for the AppService → controllers → ports pipeline.
//!
//! These run on the host (x86_64) and verify the per-tick orchestration:
//! inputs in, outputs out, events to every sink.

use autolight::adapters::log_sink::LogEventSink;
use autolight::app::context::OutputState;
use autolight::app::events::AppEvent;
use autolight::app::service::AppService;
use autolight::config::SystemConfig;
use autolight::diagnostics::{TransitionKind, TransitionLog};
use autolight::error::{ActuatorError, SensorError};

use crate::mock_hw::{MockHardware, RecordingSink, Rig};

#[test]
fn start_resets_outputs_and_announces() {
    let rig = Rig::new(SystemConfig::default());
    assert_eq!(rig.hw.applied, vec![OutputState::default()]);
    assert_eq!(rig.sink.events, vec![AppEvent::Started]);
    assert_eq!(rig.app.tick_count(), 0);
}

#[test]
fn outputs_are_applied_every_tick() {
    let mut rig = Rig::new(SystemConfig::default());
    rig.run(25);
    assert_eq!(rig.hw.applied.len(), 26);
    assert_eq!(rig.app.tick_count(), 25);
    assert!(rig.hw.applied.iter().all(|o| *o == OutputState::default()));
}

#[test]
fn held_button_at_power_up_is_not_a_release() {
    let mut rig = Rig::new(SystemConfig::default());
    rig.hw.inputs.seat_occupied = true;
    rig.hw.inputs.ignition_pressed = true;
    rig.run(20);
    assert!(!rig.app.engine_running());

    rig.hw.inputs.ignition_pressed = false;
    rig.run(5);
    assert!(rig.app.engine_running());
}

#[test]
fn sensor_failure_reuses_last_snapshot() {
    let mut rig = Rig::new(SystemConfig::default());
    rig.hw.inputs.seat_occupied = true;
    rig.run(1);

    rig.hw.fail_reads = true;
    rig.press_and_release(5);
    assert!(!rig.app.engine_running(), "button changes must not be seen");
    assert!(rig.app.build_telemetry().seat_occupied);
    assert_eq!(
        rig.sink
            .count(|e| *e == AppEvent::SensorFault(SensorError::GpioReadFailed)),
        10
    );
}

#[test]
fn actuator_failure_is_reported_and_control_continues() {
    let mut rig = Rig::new(SystemConfig::default());
    rig.hw.inputs.seat_occupied = true;
    rig.hw.fail_writes = true;
    rig.run(1);
    rig.press_and_release(5);

    assert!(rig.app.engine_running());
    assert_eq!(
        rig.sink
            .count(|e| *e == AppEvent::ActuatorFault(ActuatorError::GpioWriteFailed)),
        11
    );

    rig.hw.fail_writes = false;
    rig.run(1);
    assert!(rig.hw.last_outputs().engine_running);
}

#[test]
fn telemetry_reports_current_state() {
    let mut rig = Rig::new(SystemConfig::default());
    rig.hw.inputs.light_reading = 0.9;
    rig.run(100);

    let telemetry: Vec<_> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Telemetry(t) => Some(t.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(telemetry.len(), 1);
    let t = &telemetry[0];
    assert_eq!(t.tick, 100);
    assert!(!t.engine_running);
    assert_eq!(t.mode, None);
    assert!((t.light_reading - 0.9).abs() < f32::EPSILON);
    assert_eq!(t.hold_timer_ms, 1000);
}

#[test]
fn sinks_can_be_chained() {
    let mut app = AppService::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sinks = ((LogEventSink::new(), RecordingSink::new()), TransitionLog::new());
    app.start(&mut hw, &mut sinks);

    hw.inputs.seat_occupied = true;
    hw.inputs.mode_reading = 0.1;
    app.tick(&mut hw, &mut sinks);
    hw.inputs.ignition_pressed = true;
    for _ in 0..5 {
        app.tick(&mut hw, &mut sinks);
    }
    hw.inputs.ignition_pressed = false;
    for _ in 0..5 {
        app.tick(&mut hw, &mut sinks);
    }

    let ((_, recorded), history) = &sinks;
    assert_eq!(recorded.engine_changes(), vec![(11, true)]);
    let kinds: Vec<TransitionKind> = history.oldest_first().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransitionKind::Engine { running: true },
            TransitionKind::LowBeams { on: true },
        ]
    );
}
