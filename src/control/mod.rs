//! Control policies, one per output group.
//!
//! Each controller is plain state plus an `update` called once per tick
//! by [`AppService`](crate::app::service::AppService), ignition first.

pub mod bands;
pub mod headlight;
pub mod ignition;
