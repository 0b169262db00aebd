//! GPIO / peripheral pin assignments for the lighting controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Digital inputs (pull-down, HIGH = asserted)
// ---------------------------------------------------------------------------

/// Driver-seat occupancy switch.
pub const DRIVER_SEAT_GPIO: i32 = 5;
/// Momentary ignition push-button.
pub const IGNITION_GPIO: i32 = 6;
/// High-beam stalk switch.
pub const HIGH_BEAM_SWITCH_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Analog inputs (ADC1)
// ---------------------------------------------------------------------------

/// Headlight mode selector potentiometer, ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const ADC1_CH_HEADLIGHT_MODE: u32 = 0;
/// Ambient light sensor (LDR divider), ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const ADC1_CH_LIGHT_SENSOR: u32 = 3;

/// Full-scale count of the 12-bit ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

// ---------------------------------------------------------------------------
// Outputs (HIGH = lamp / indicator on)
// ---------------------------------------------------------------------------

pub const LEFT_LOW_BEAM_GPIO: i32 = 8;
pub const RIGHT_LOW_BEAM_GPIO: i32 = 9;
pub const LEFT_HIGH_BEAM_GPIO: i32 = 10;
pub const RIGHT_HIGH_BEAM_GPIO: i32 = 11;

/// Engine-running indicator (stands in for the starter relay).
pub const ENGINE_GPIO: i32 = 12;

/// Every digital input, in the order `hw_init` configures them.
pub const INPUT_PINS: [i32; 3] = [DRIVER_SEAT_GPIO, IGNITION_GPIO, HIGH_BEAM_SWITCH_GPIO];

/// Every digital output, in the order `hw_init` configures them.
pub const OUTPUT_PINS: [i32; 5] = [
    LEFT_LOW_BEAM_GPIO,
    RIGHT_LOW_BEAM_GPIO,
    LEFT_HIGH_BEAM_GPIO,
    RIGHT_HIGH_BEAM_GPIO,
    ENGINE_GPIO,
];
