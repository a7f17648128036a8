//! Wire codec for monitor notifications.
//!
//! A monitor notification is exactly two frames on the underlying transport:
//!
//! - Frame 1: 6 bytes — `event_id` (2 bytes, unsigned) followed immediately
//!   by `value` (4 bytes, signed), no padding, native byte order.
//! - Frame 2: the endpoint identifier, raw bytes.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{MonitorError, Result};
use crate::event::MonitorEvent;

/// Exact length of the first (event) frame.
pub const EVENT_FRAME_LEN: usize = 6;

/// Number of frames in a monitor notification.
pub const FRAME_COUNT: usize = 2;

/// Decode a raw two-frame monitor message into a [`MonitorEvent`].
///
/// # Errors
///
/// Returns [`MonitorError::MalformedMessage`] when the frame count is not
/// exactly two or the first frame is not exactly six bytes. The offending
/// frames are carried in the error for diagnostics.
pub fn decode(frames: &[Bytes]) -> Result<MonitorEvent> {
    if frames.len() != FRAME_COUNT || frames[0].len() != EVENT_FRAME_LEN {
        return Err(MonitorError::MalformedMessage {
            frames: frames.to_vec(),
        });
    }

    let event = &frames[0];
    // Native byte order, matching the emitting library on the same host.
    let event_id = u16::from_ne_bytes([event[0], event[1]]);
    let value = i32::from_ne_bytes([event[2], event[3], event[4], event[5]]);

    Ok(MonitorEvent {
        event_id,
        value,
        endpoint: frames[1].clone(),
    })
}

/// Encode a [`MonitorEvent`] into its two-frame wire form.
#[must_use]
pub fn encode(event: &MonitorEvent) -> Vec<Bytes> {
    let mut first = BytesMut::with_capacity(EVENT_FRAME_LEN);
    first.put_slice(&event.event_id.to_ne_bytes());
    first.put_slice(&event.value.to_ne_bytes());
    vec![first.freeze(), event.endpoint.clone()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(bytes: &'static [u8]) -> Bytes {
        Bytes::from_static(bytes)
    }

    #[test]
    fn test_decode_concrete_event() {
        // event_id=1, value=42, little-endian host layout.
        let first = Bytes::from(
            1u16.to_ne_bytes()
                .iter()
                .chain(42i32.to_ne_bytes().iter())
                .copied()
                .collect::<Vec<u8>>(),
        );
        if cfg!(target_endian = "little") {
            assert_eq!(&first[..], &[0x01, 0x00, 0x2A, 0x00, 0x00, 0x00]);
        }

        let event = decode(&[first, frame(b"tcp://127.0.0.1:5555")]).unwrap();
        assert_eq!(event.event_id, 1);
        assert_eq!(event.value, 42);
        assert_eq!(&event.endpoint[..], b"tcp://127.0.0.1:5555");
    }

    #[test]
    fn test_round_trip_boundary_values() {
        let cases = [
            (0u16, 0i32),
            (1, 42),
            (u16::MAX, i32::MIN),
            (u16::MAX, i32::MAX),
            (0x0200, -1),
        ];
        for (event_id, value) in cases {
            let original = MonitorEvent::new(event_id, value, &b"ipc:///tmp/mon.sock"[..]);
            let decoded = decode(&original.to_frames()).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_no_sign_extension_on_event_id() {
        // High bit set in the id must stay an unsigned code.
        let event = MonitorEvent::new(0x8000, -2, &b"x"[..]);
        let decoded = decode(&event.to_frames()).unwrap();
        assert_eq!(decoded.event_id, 0x8000);
        assert_eq!(decoded.value, -2);
    }

    #[test]
    fn test_reject_wrong_frame_count() {
        let single = vec![frame(b"\x01\x02\x03\x04\x05\x06")];
        let err = decode(&single).unwrap_err();
        assert!(matches!(err, MonitorError::MalformedMessage { .. }));

        let three = vec![frame(b"\x01\x02\x03\x04\x05\x06"), frame(b"a"), frame(b"b")];
        assert!(decode(&three).is_err());

        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_reject_wrong_first_frame_length() {
        let msg = vec![frame(b"\x01\x02\x03"), frame(b"tcp://127.0.0.1:5555")];
        let err = decode(&msg).unwrap_err();
        match err {
            MonitorError::MalformedMessage { frames } => {
                // The received message rides along for diagnostics.
                assert_eq!(frames.len(), 2);
                assert_eq!(&frames[0][..], b"\x01\x02\x03");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_endpoint_frame_is_valid() {
        let event = MonitorEvent::new(0x0400, 0, Bytes::new());
        let decoded = decode(&event.to_frames()).unwrap();
        assert!(decoded.endpoint.is_empty());
    }
}
