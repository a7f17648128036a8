//! # Sockmon
//!
//! Socket-monitor event receiving for ZeroMQ-style messaging runtimes.
//!
//! A messaging runtime can expose a paired monitor channel per socket that
//! emits lifecycle notifications: connects, disconnects, bind failures,
//! handshake results. Each notification is a two-frame multipart message
//! with a fixed 6-byte event frame followed by the affected endpoint.
//! This crate decodes those notifications and receives them under either
//! concurrency model the owning socket was built with.
//!
//! ## Architecture
//!
//! - **`sockmon-core`**: sans-IO event model, wire codec, version gate
//! - **`sockmon`**: socket capability traits and receive paths (this crate)
//!
//! The transport, reactor, and socket lifecycle stay in the host runtime;
//! this layer reaches them only through [`MonitorSocket`] /
//! [`AsyncMonitorSocket`].
//!
//! ## Quick Start
//!
//! ```
//! use sockmon::prelude::*;
//!
//! # fn main() -> sockmon::Result<()> {
//! // In-process monitor channel (a real binding wraps its own socket).
//! let (sender, mut socket) = sockmon::inproc::monitor_pair(Version::new(4, 3, 5));
//! sender.send(&MonitorEvent::new(
//!     EventKind::Connected.code(),
//!     42,
//!     &b"tcp://127.0.0.1:5555"[..],
//! ))?;
//!
//! let event = sockmon::recv_monitor_event(&mut socket, RecvFlags::NONE)?;
//! assert_eq!(event.kind(), Some(EventKind::Connected));
//! # Ok(())
//! # }
//! ```
//!
//! Cooperative callers use [`recv_monitor_event_async`] or wrap the socket
//! with [`event_stream`]; the two entry points share the decode logic and
//! differ only in how the receive suspends.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dev_tracing;
pub mod inproc;
pub mod recv;
pub mod socket;
pub mod stream;

// Re-export core types
pub use bytes::Bytes;
pub use sockmon_core::error::{MonitorError, Result};
pub use sockmon_core::event::{EventKind, MonitorEvent};
pub use sockmon_core::flags::RecvFlags;
pub use sockmon_core::version::{Version, MONITOR_API_MIN};
pub use sockmon_core::wire::{decode, encode};

pub use recv::{recv_monitor_event, recv_monitor_event_async};
pub use socket::{AsyncMonitorSocket, MonitorSocket};
pub use stream::event_stream;

/// Convenience imports for downstream crates.
pub mod prelude {
    pub use crate::recv::{recv_monitor_event, recv_monitor_event_async};
    pub use crate::socket::{AsyncMonitorSocket, MonitorSocket};
    pub use crate::stream::event_stream;
    pub use sockmon_core::prelude::*;
}
