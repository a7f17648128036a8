//! Monitor receive entry points.
//!
//! Both entry points share one shape: gate on the library version, pull
//! exactly one multipart message from the socket, decode it. No retry is
//! performed here; continuous monitoring is a caller loop.

use tracing::{trace, warn};

use sockmon_core::error::{MonitorError, Result};
use sockmon_core::event::MonitorEvent;
use sockmon_core::flags::RecvFlags;
use sockmon_core::version::MONITOR_API_MIN;
use sockmon_core::wire;

use crate::socket::{AsyncMonitorSocket, MonitorSocket};

const MONITOR_FEATURE: &str = "socket monitor event API";

/// Receive and decode one monitor event, blocking the calling thread.
///
/// Consumes exactly one message from the socket's receive queue per
/// successful call.
///
/// # Errors
///
/// - [`MonitorError::UnsupportedFeature`] before any I/O when the native
///   library predates the monitor event API (4.0).
/// - [`MonitorError::MalformedMessage`] when the message does not match the
///   two-frame monitor layout.
/// - [`MonitorError::Io`] passing through any receive error unmodified,
///   e.g. `WouldBlock` under [`RecvFlags::DONTWAIT`].
pub fn recv_monitor_event<S>(socket: &mut S, flags: RecvFlags) -> Result<MonitorEvent>
where
    S: MonitorSocket + ?Sized,
{
    socket.lib_version().require(MONITOR_API_MIN, MONITOR_FEATURE)?;
    let frames = socket.recv_multipart(flags)?;
    decode_traced(&frames)
}

/// Receive and decode one monitor event, suspending the cooperative task.
///
/// The returned future resolves to the decoded event once the underlying
/// receive completes. The version gate runs before the first await, so an
/// unsupported library fails on first poll without touching the socket.
///
/// # Errors
///
/// Same conditions as [`recv_monitor_event`].
pub async fn recv_monitor_event_async<S>(socket: &mut S, flags: RecvFlags) -> Result<MonitorEvent>
where
    S: AsyncMonitorSocket + ?Sized,
{
    socket.lib_version().require(MONITOR_API_MIN, MONITOR_FEATURE)?;
    let frames = socket.recv_multipart(flags).await?;
    decode_traced(&frames)
}

fn decode_traced(frames: &[bytes::Bytes]) -> Result<MonitorEvent> {
    match wire::decode(frames) {
        Ok(event) => {
            trace!(event_id = event.event_id, value = event.value, "monitor event");
            Ok(event)
        }
        Err(err) => {
            if let MonitorError::MalformedMessage { frames } = &err {
                warn!(frame_count = frames.len(), "malformed monitor message");
            }
            Err(err)
        }
    }
}
