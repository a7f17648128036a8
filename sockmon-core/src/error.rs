/// Sockmon Error Types
///
/// Error handling for monitor decode and receive operations.

use bytes::Bytes;
use std::io;
use thiserror::Error;

use crate::version::Version;

/// Main error type for monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The raw message did not match the two-frame monitor layout
    #[error("invalid monitor event message ({} frames): {frames:?}", frames.len())]
    MalformedMessage {
        /// The message as received, for diagnostics
        frames: Vec<Bytes>,
    },

    /// The installed native library predates the required API
    #[error("{feature} requires library >= {required}, found {actual}")]
    UnsupportedFeature {
        /// Name of the gated capability
        feature: &'static str,
        /// Minimum version that provides it
        required: Version,
        /// Version actually installed
        actual: Version,
    },

    /// IO error from the underlying receive primitive, passed through
    /// unmodified
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Check if this error is recoverable by calling again
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::Interrupted
                    | io::ErrorKind::WouldBlock
                    | io::ErrorKind::TimedOut
            ),
            Self::MalformedMessage { .. } | Self::UnsupportedFeature { .. } => false,
        }
    }

    /// Check if this is a non-blocking "no message available" signal
    #[must_use]
    pub fn would_block(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::WouldBlock)
    }

    /// Check if the underlying channel or socket is gone
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Self::Io(e) if matches!(
                e.kind(),
                io::ErrorKind::BrokenPipe
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::UnexpectedEof
            )
        )
    }
}
