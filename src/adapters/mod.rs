//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | SensorPort         | ESP32 ADC, GPIO          |
//! |                | ActuatorPort       | ESP32 GPIO               |
//! | `log_sink`     | EventSink          | Serial log output        |
//!
//! [`TransitionLog`](crate::diagnostics::TransitionLog) is a third
//! `EventSink`, kept with the other diagnostics.

pub mod hardware;
pub mod log_sink;
