//! Trait-based socket capability interface for monitor channels.
//!
//! The monitor receiver only ever needs two things from its socket
//! collaborator: the installed native library version (for the feature
//! gate) and a multipart receive. Whether that receive blocks the calling
//! thread or suspends a cooperative task is fixed when the socket is
//! constructed, so the two concurrency modes are two separate traits
//! rather than a runtime branch:
//!
//! - [`MonitorSocket`] - thread-blocking receive
//! - [`AsyncMonitorSocket`] - cooperative (async) receive
//!
//! Implementations wrap whatever the underlying runtime hands out for a
//! monitor channel; [`crate::inproc`] provides a channel-backed pair that
//! implements both.

use bytes::Bytes;
use std::io;

use sockmon_core::flags::RecvFlags;
use sockmon_core::version::Version;

/// A monitor channel whose receive blocks the calling thread.
///
/// # Examples
///
/// ```no_run
/// use sockmon::prelude::*;
///
/// fn watch(socket: &mut impl MonitorSocket) -> sockmon::Result<()> {
///     loop {
///         let event = sockmon::recv_monitor_event(socket, RecvFlags::NONE)?;
///         println!("{event}");
///     }
/// }
/// ```
pub trait MonitorSocket {
    /// Version of the native library backing this socket.
    fn lib_version(&self) -> Version;

    /// Receive one multipart message, blocking until one is available.
    ///
    /// With [`RecvFlags::DONTWAIT`] the collaborator decides whether to
    /// block; an empty queue surfaces as `WouldBlock`.
    ///
    /// # Errors
    ///
    /// Any error from the underlying receive primitive, unmodified.
    fn recv_multipart(&mut self, flags: RecvFlags) -> io::Result<Vec<Bytes>>;
}

/// A monitor channel whose receive suspends a cooperative task.
///
/// Ordering across concurrent receives on the same socket is undefined;
/// the monitor channel is logically a single-reader stream and callers
/// serialize access. Cancelling the returned future is delegated to the
/// underlying receive primitive's own cancellation contract.
#[async_trait::async_trait(?Send)]
pub trait AsyncMonitorSocket {
    /// Version of the native library backing this socket.
    fn lib_version(&self) -> Version;

    /// Receive one multipart message, suspending until one is available.
    ///
    /// # Errors
    ///
    /// Any error from the underlying receive primitive, unmodified.
    async fn recv_multipart(&mut self, flags: RecvFlags) -> io::Result<Vec<Bytes>>;
}
