//! Autolight firmware library.
//!
//! Ignition and automatic headlight control for a vehicle lighting module.
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod error;
pub mod fsm;
pub mod pins;

// Hardware-facing modules; on the host they run against simulated pins.
pub mod adapters;
pub mod drivers;
pub mod sensors;
