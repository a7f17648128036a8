//! Stream adapter over the async receive path.
//!
//! Continuous monitoring is "call receive in a loop"; this wraps that loop
//! as a `futures::Stream` for callers composing with stream combinators.

use futures::Stream;

use sockmon_core::error::Result;
use sockmon_core::event::MonitorEvent;
use sockmon_core::flags::RecvFlags;

use crate::recv::recv_monitor_event_async;
use crate::socket::AsyncMonitorSocket;

/// Turn an owned async monitor socket into a stream of decoded events.
///
/// The stream ends when the underlying socket reports closure; every other
/// error (including malformed messages) is yielded as an `Err` item and the
/// stream continues, matching the no-retry, caller-decides contract of
/// [`recv_monitor_event_async`].
///
/// # Examples
///
/// ```no_run
/// use futures::StreamExt;
/// use sockmon::prelude::*;
///
/// async fn watch(socket: impl AsyncMonitorSocket + 'static) {
///     let mut events = Box::pin(sockmon::event_stream(socket));
///     while let Some(event) = events.next().await {
///         match event {
///             Ok(event) => println!("{event}"),
///             Err(err) => eprintln!("monitor error: {err}"),
///         }
///     }
/// }
/// ```
pub fn event_stream<S>(socket: S) -> impl Stream<Item = Result<MonitorEvent>>
where
    S: AsyncMonitorSocket + 'static,
{
    futures::stream::unfold(socket, |mut socket| async move {
        match recv_monitor_event_async(&mut socket, RecvFlags::NONE).await {
            Err(err) if err.is_closed() => None,
            item => Some((item, socket)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inproc::monitor_pair;
    use futures::StreamExt;
    use sockmon_core::version::Version;

    #[test]
    fn test_stream_yields_events_then_ends_on_close() {
        let (sender, socket) = monitor_pair(Version::new(4, 1, 0));
        let first = MonitorEvent::new(0x0008, 0, &b"tcp://0.0.0.0:5555"[..]);
        let second = MonitorEvent::new(0x0020, 11, &b"tcp://0.0.0.0:5555"[..]);
        sender.send(&first).unwrap();
        sender.send(&second).unwrap();
        drop(sender);

        let events: Vec<_> = futures::executor::block_on(event_stream(socket).collect::<Vec<_>>());
        assert_eq!(events.len(), 2);
        assert_eq!(*events[0].as_ref().unwrap(), first);
        assert_eq!(*events[1].as_ref().unwrap(), second);
    }

    #[test]
    fn test_stream_surfaces_malformed_and_continues() {
        let (sender, socket) = monitor_pair(Version::new(4, 1, 0));
        sender
            .send_frames(vec![bytes::Bytes::from_static(b"\x01\x02\x03")])
            .unwrap();
        let good = MonitorEvent::new(0x0001, 3, &b"inproc://mon"[..]);
        sender.send(&good).unwrap();
        drop(sender);

        let events: Vec<_> = futures::executor::block_on(event_stream(socket).collect::<Vec<_>>());
        assert_eq!(events.len(), 2);
        assert!(events[0].is_err());
        assert_eq!(*events[1].as_ref().unwrap(), good);
    }
}
