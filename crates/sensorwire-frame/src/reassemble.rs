use bytes::{Bytes, BytesMut};

use crate::error::Result;
use crate::frame::{split_frames, Frame};

/// A payload buffer reassembled from one frame run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Concatenated payload bytes in receipt order.
    pub bytes: Bytes,
    /// False when the run ended without a stop sentinel. The buffer may be
    /// incomplete; callers decide whether to decode it anyway.
    pub terminated: bool,
}

impl Payload {
    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if no payload bytes were reassembled.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the payload and return the buffer.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Reassemble one payload from an ordered run of frames.
///
/// Appends each frame's 8 payload bytes in order and stops immediately after
/// the first frame whose trailer carries the stop sentinel; any frames after
/// it are ignored, which is not an error. A run with no stop sentinel is
/// consumed in full and flagged unterminated. An empty run yields an empty
/// buffer.
pub fn combine(frames: impl IntoIterator<Item = Frame>) -> Payload {
    let mut buf = BytesMut::new();
    let mut terminated = false;
    let mut consumed = 0usize;

    for frame in frames {
        buf.extend_from_slice(frame.payload());
        consumed += 1;

        if frame.is_last() {
            terminated = true;
            break;
        }
    }

    if !terminated && consumed > 0 {
        tracing::warn!(
            frames = consumed,
            bytes = buf.len(),
            "payload run ended without stop sentinel"
        );
    }

    Payload {
        bytes: buf.freeze(),
        terminated,
    }
}

/// Segment a raw burst into frames and reassemble them in one step.
pub fn reassemble_burst(raw: &[u8]) -> Result<Payload> {
    Ok(combine(split_frames(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{encode_frames, STOP_SENTINEL};

    fn frame(fill: u8, trailer: u8) -> Frame {
        Frame::new(&[fill; 8], trailer)
    }

    #[test]
    fn combines_up_to_stop_sentinel() {
        let payload = combine([frame(1, 0x00), frame(2, 0x00), frame(3, STOP_SENTINEL)]);

        assert!(payload.terminated);
        assert_eq!(payload.len(), 24);
        assert_eq!(&payload.bytes[..8], &[1u8; 8]);
        assert_eq!(&payload.bytes[16..], &[3u8; 8]);
    }

    #[test]
    fn stop_sentinel_takes_precedence_over_later_frames() {
        let payload = combine([
            frame(1, 0x00),
            frame(2, STOP_SENTINEL),
            frame(3, 0x00),
            frame(4, STOP_SENTINEL),
        ]);

        assert!(payload.terminated);
        assert_eq!(payload.len(), 16);
        assert_eq!(&payload.bytes[8..], &[2u8; 8]);
    }

    #[test]
    fn unterminated_run_is_consumed_in_full() {
        let payload = combine([frame(1, 0x00), frame(2, 0x00), frame(3, 0xFF)]);

        assert!(!payload.terminated);
        assert_eq!(payload.len(), 24);
    }

    #[test]
    fn empty_run_yields_empty_buffer() {
        let payload = combine([]);
        assert!(payload.is_empty());
        assert!(!payload.terminated);
    }

    #[test]
    fn marker_byte_is_not_inspected() {
        let mut raw = [0u8; 10];
        raw[0] = 0x77; // arbitrary marker
        raw[1..9].copy_from_slice(&[9u8; 8]);
        raw[9] = STOP_SENTINEL;

        let payload = combine([Frame::from_bytes(&raw).unwrap()]);
        assert!(payload.terminated);
        assert_eq!(payload.bytes.as_ref(), &[9u8; 8]);
    }

    #[test]
    fn example_three_frame_run() {
        // Three frames [0x02, b0..b7, t] carrying bytes 0..24.
        let mut wire = Vec::new();
        let data: Vec<u8> = (0..24).collect();
        for (i, chunk) in data.chunks_exact(8).enumerate() {
            wire.push(0x02);
            wire.extend_from_slice(chunk);
            wire.push(if i == 2 { STOP_SENTINEL } else { 0x00 });
        }

        let payload = reassemble_burst(&wire).unwrap();
        assert!(payload.terminated);
        assert_eq!(payload.bytes.as_ref(), data.as_slice());
    }

    #[test]
    fn encode_then_reassemble_roundtrip() {
        let data: Vec<u8> = (0..64).map(|b| b ^ 0x5A).collect();
        let mut wire = BytesMut::new();
        encode_frames(&data, &mut wire).unwrap();

        let payload = reassemble_burst(&wire).unwrap();
        assert!(payload.terminated);
        assert_eq!(payload.bytes.as_ref(), data.as_slice());
    }
}
