//! Fuzz target: `SystemConfig::from_json`
//!
//! Arbitrary bytes must either be rejected or yield a configuration that
//! passes its own validation and can drive the service.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use autolight::config::SystemConfig;
use autolight::control::headlight::HeadlightController;
use autolight::control::ignition::IgnitionController;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = SystemConfig::from_json(data) else {
        return;
    };
    assert!(config.validate().is_ok());
    assert!(config.telemetry_interval_ticks() >= 1);

    let mut ignition = IgnitionController::new(&config);
    let mut headlight = HeadlightController::new(&config);
    for tick in 0..64u32 {
        ignition.update(tick % 3 == 0, tick % 7 < 4);
        headlight.update(ignition.engine_running(), 0.9, 0.5);
    }
});
