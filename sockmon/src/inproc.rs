//! In-process monitor channel.
//!
//! A channel-backed monitor pair for runtimes that emit lifecycle events
//! in-process rather than over a transport. The receiving half implements
//! both socket traits, so it serves the blocking and the cooperative
//! receive path from the same queue. Also the workhorse of this crate's
//! own tests.

use bytes::Bytes;
use std::io;

use sockmon_core::event::MonitorEvent;
use sockmon_core::flags::RecvFlags;
use sockmon_core::version::Version;

use crate::socket::{AsyncMonitorSocket, MonitorSocket};

/// Emitting half of an in-process monitor channel.
///
/// Events are encoded to their wire form on send, so the receiving half
/// exercises the same decode path as a transport-backed monitor socket.
#[derive(Debug, Clone)]
pub struct MonitorSender {
    tx: flume::Sender<Vec<Bytes>>,
}

impl MonitorSender {
    /// Emit one event.
    ///
    /// # Errors
    ///
    /// `BrokenPipe` when the receiving half has been dropped.
    pub fn send(&self, event: &MonitorEvent) -> io::Result<()> {
        self.tx
            .send(event.to_frames())
            .map_err(|_| closed("monitor channel receiver dropped"))
    }

    /// Emit raw frames without encoding.
    ///
    /// Test hook for injecting malformed messages.
    ///
    /// # Errors
    ///
    /// `BrokenPipe` when the receiving half has been dropped.
    pub fn send_frames(&self, frames: Vec<Bytes>) -> io::Result<()> {
        self.tx
            .send(frames)
            .map_err(|_| closed("monitor channel receiver dropped"))
    }
}

/// Receiving half of an in-process monitor channel.
///
/// Implements [`MonitorSocket`] (flume's blocking receive) and
/// [`AsyncMonitorSocket`] (flume's async receive) over the same queue.
#[derive(Debug)]
pub struct InprocMonitorSocket {
    rx: flume::Receiver<Vec<Bytes>>,
    version: Version,
}

impl MonitorSocket for InprocMonitorSocket {
    fn lib_version(&self) -> Version {
        self.version
    }

    fn recv_multipart(&mut self, flags: RecvFlags) -> io::Result<Vec<Bytes>> {
        if flags.contains(RecvFlags::DONTWAIT) {
            return match self.rx.try_recv() {
                Ok(frames) => Ok(frames),
                Err(flume::TryRecvError::Empty) => {
                    Err(io::Error::from(io::ErrorKind::WouldBlock))
                }
                Err(flume::TryRecvError::Disconnected) => {
                    Err(closed("monitor channel sender dropped"))
                }
            };
        }
        self.rx
            .recv()
            .map_err(|_| closed("monitor channel sender dropped"))
    }
}

#[async_trait::async_trait(?Send)]
impl AsyncMonitorSocket for InprocMonitorSocket {
    fn lib_version(&self) -> Version {
        self.version
    }

    async fn recv_multipart(&mut self, flags: RecvFlags) -> io::Result<Vec<Bytes>> {
        if flags.contains(RecvFlags::DONTWAIT) {
            return MonitorSocket::recv_multipart(self, flags);
        }
        self.rx
            .recv_async()
            .await
            .map_err(|_| closed("monitor channel sender dropped"))
    }
}

/// Creates a new in-process monitoring channel pair.
///
/// `lib_version` is the version the receiving half reports to the feature
/// gate; a real binding passes the installed library's version.
#[must_use]
pub fn monitor_pair(lib_version: Version) -> (MonitorSender, InprocMonitorSocket) {
    let (tx, rx) = flume::unbounded();
    (
        MonitorSender { tx },
        InprocMonitorSocket {
            rx,
            version: lib_version,
        },
    )
}

fn closed(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, msg.to_string())
}
