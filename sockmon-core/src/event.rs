//! Monitor event model.
//!
//! A [`MonitorEvent`] is one socket-lifecycle notification as emitted on a
//! socket's monitoring channel: a numeric event code, an auxiliary value
//! whose meaning depends on the code, and the affected endpoint as raw
//! bytes.

use bytes::Bytes;
use std::fmt;

use crate::wire;

/// One socket-lifecycle notification received from a monitor channel.
///
/// The event is constructed transiently from a single raw message and handed
/// to the caller; it carries no connection state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorEvent {
    /// Event kind code per the native event enumeration.
    ///
    /// Opaque beyond being numeric; use [`MonitorEvent::kind`] to map the
    /// well-known codes.
    pub event_id: u16,

    /// Auxiliary payload: a file descriptor, error code, or retry interval
    /// depending on `event_id`.
    pub value: i32,

    /// The affected endpoint, carried as raw bytes.
    ///
    /// Commonly a UTF-8 address string such as `tcp://127.0.0.1:5555`, but
    /// no encoding is assumed.
    pub endpoint: Bytes,
}

impl MonitorEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(event_id: u16, value: i32, endpoint: impl Into<Bytes>) -> Self {
        Self {
            event_id,
            value,
            endpoint: endpoint.into(),
        }
    }

    /// Map the raw event code to a well-known [`EventKind`].
    ///
    /// Returns `None` for codes this crate does not know about; the raw
    /// `event_id` is never lost.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_code(self.event_id)
    }

    /// The endpoint as a UTF-8 string, replacing invalid sequences.
    #[must_use]
    pub fn endpoint_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.endpoint)
    }

    /// Encode this event into its two-frame wire form.
    ///
    /// See [`wire::encode`] for the layout.
    #[must_use]
    pub fn to_frames(&self) -> Vec<Bytes> {
        wire::encode(self)
    }
}

impl fmt::Display for MonitorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(
                f,
                "{} on {} (value {})",
                kind,
                self.endpoint_str(),
                self.value
            ),
            None => write!(
                f,
                "event {:#06x} on {} (value {})",
                self.event_id,
                self.endpoint_str(),
                self.value
            ),
        }
    }
}

/// Well-known socket-lifecycle event codes.
///
/// The discriminants match the native library's event enumeration; the set
/// is non-exhaustive on the wire, so unknown codes map to `None` in
/// [`EventKind::from_code`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EventKind {
    /// Socket successfully connected to a peer.
    Connected = 0x0001,
    /// Synchronous connect failed; retry scheduled.
    ConnectDelayed = 0x0002,
    /// Asynchronous connect retry attempted.
    ConnectRetried = 0x0004,
    /// Socket is listening for incoming connections.
    Listening = 0x0008,
    /// Bind operation failed.
    BindFailed = 0x0010,
    /// Socket accepted a new incoming connection.
    Accepted = 0x0020,
    /// Accept operation failed.
    AcceptFailed = 0x0040,
    /// Connection closed.
    Closed = 0x0080,
    /// Connection close failed.
    CloseFailed = 0x0100,
    /// Session broken; peer disconnected.
    Disconnected = 0x0200,
    /// Monitoring on this socket ended.
    MonitorStopped = 0x0400,
    /// Protocol handshake failed without further detail.
    HandshakeFailedNoDetail = 0x0800,
    /// Protocol handshake succeeded.
    HandshakeSucceeded = 0x1000,
    /// Protocol handshake failed with a protocol error.
    HandshakeFailedProtocol = 0x2000,
    /// Protocol handshake failed during authentication.
    HandshakeFailedAuth = 0x4000,
}

impl EventKind {
    /// Map a raw event code to a well-known kind.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            0x0001 => Self::Connected,
            0x0002 => Self::ConnectDelayed,
            0x0004 => Self::ConnectRetried,
            0x0008 => Self::Listening,
            0x0010 => Self::BindFailed,
            0x0020 => Self::Accepted,
            0x0040 => Self::AcceptFailed,
            0x0080 => Self::Closed,
            0x0100 => Self::CloseFailed,
            0x0200 => Self::Disconnected,
            0x0400 => Self::MonitorStopped,
            0x0800 => Self::HandshakeFailedNoDetail,
            0x1000 => Self::HandshakeSucceeded,
            0x2000 => Self::HandshakeFailedProtocol,
            0x4000 => Self::HandshakeFailedAuth,
            _ => return None,
        })
    }

    /// The raw event code for this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connected => "Connected",
            Self::ConnectDelayed => "Connect delayed",
            Self::ConnectRetried => "Connect retried",
            Self::Listening => "Listening",
            Self::BindFailed => "Bind failed",
            Self::Accepted => "Accepted",
            Self::AcceptFailed => "Accept failed",
            Self::Closed => "Closed",
            Self::CloseFailed => "Close failed",
            Self::Disconnected => "Disconnected",
            Self::MonitorStopped => "Monitor stopped",
            Self::HandshakeFailedNoDetail => "Handshake failed",
            Self::HandshakeSucceeded => "Handshake succeeded",
            Self::HandshakeFailedProtocol => "Handshake failed (protocol)",
            Self::HandshakeFailedAuth => "Handshake failed (auth)",
        };
        f.write_str(name)
    }
}
