//! Application core: pure domain logic, zero I/O.
//!
//! Ignition and headlight policy live in [`crate::control`]; this module
//! wires them into a single polling pass.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod context;
pub mod events;
pub mod ports;
pub mod service;
