//! Sockmon Core
//!
//! This crate contains the sans-IO building blocks for socket-monitor
//! event handling:
//! - Monitor event model and well-known event codes (`event`)
//! - Fixed-layout wire codec for monitor notifications (`wire`)
//! - Native library version gate (`version`)
//! - Receive flag bitfield (`flags`)
//! - Error types (`error`)
//!
//! Nothing in this crate performs I/O; the socket collaborator lives in the
//! `sockmon` facade crate.

#![cfg_attr(not(test), deny(unsafe_code))]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod event;
pub mod flags;
pub mod version;
pub mod wire;

// Optional: a small prelude to make downstream crates ergonomic.
// Keep it minimal to avoid API lock-in.
pub mod prelude {
    pub use crate::error::{MonitorError, Result};
    pub use crate::event::{EventKind, MonitorEvent};
    pub use crate::flags::RecvFlags;
    pub use crate::version::{Version, MONITOR_API_MIN};
    pub use crate::wire::{decode, encode};
}
