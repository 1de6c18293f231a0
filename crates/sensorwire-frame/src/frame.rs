use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Frame wire size: marker (1) + payload (8) + trailer (1) = 10 bytes.
pub const FRAME_SIZE: usize = 10;

/// Payload bytes carried by each frame.
pub const FRAME_PAYLOAD_SIZE: usize = 8;

/// Trailer value that marks the last frame of a payload run.
pub const STOP_SENTINEL: u8 = 0x01;

/// Marker byte written by the encoder. The receive path does not check it.
pub const START_MARKER: u8 = 0x02;

/// One fixed-size chunk of the serial protocol.
///
/// Wire format:
/// ```text
/// ┌─────────────┬──────────────────┬──────────────────────┐
/// │ Marker (1B) │ Payload (8B)     │ Trailer (1B)         │
/// │ 0x02        │                  │ 0x01 = last frame    │
/// └─────────────┴──────────────────┴──────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_SIZE],
}

impl Frame {
    /// Parse a frame from raw bytes. Only the length is checked.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let bytes: [u8; FRAME_SIZE] = raw
            .try_into()
            .map_err(|_| FrameError::WrongFrameSize { len: raw.len() })?;
        Ok(Self { bytes })
    }

    /// Build a frame from a payload chunk and a trailer byte.
    pub fn new(payload: &[u8; FRAME_PAYLOAD_SIZE], trailer: u8) -> Self {
        let mut bytes = [0u8; FRAME_SIZE];
        bytes[0] = START_MARKER;
        bytes[1..1 + FRAME_PAYLOAD_SIZE].copy_from_slice(payload);
        bytes[FRAME_SIZE - 1] = trailer;
        Self { bytes }
    }

    /// The start marker byte.
    pub fn marker(&self) -> u8 {
        self.bytes[0]
    }

    /// The 8 payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..1 + FRAME_PAYLOAD_SIZE]
    }

    /// The trailer byte.
    pub fn trailer(&self) -> u8 {
        self.bytes[FRAME_SIZE - 1]
    }

    /// True if the trailer carries the stop sentinel.
    pub fn is_last(&self) -> bool {
        self.trailer() == STOP_SENTINEL
    }

    /// The raw wire bytes.
    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }
}

/// Segment a raw burst into whole frames.
///
/// The transport delivers frames back to back; a burst whose length is not a
/// multiple of [`FRAME_SIZE`] cannot be segmented and is rejected.
pub fn split_frames(raw: &[u8]) -> Result<Vec<Frame>> {
    if raw.len() % FRAME_SIZE != 0 {
        return Err(FrameError::TruncatedBurst { len: raw.len() });
    }

    raw.chunks_exact(FRAME_SIZE).map(Frame::from_bytes).collect()
}

/// Encode a payload into the framed wire format.
///
/// The payload is split into 8-byte chunks; every frame gets the start
/// marker, and the last frame's trailer carries the stop sentinel. This is
/// the firmware-side inverse of [`combine`](crate::reassemble::combine),
/// used for loopback tests and capture generation.
pub fn encode_frames(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() % FRAME_PAYLOAD_SIZE != 0 {
        return Err(FrameError::PayloadNotFrameAligned {
            len: payload.len(),
        });
    }

    let frames = payload.len() / FRAME_PAYLOAD_SIZE;
    dst.reserve(frames * FRAME_SIZE);
    for (i, chunk) in payload.chunks_exact(FRAME_PAYLOAD_SIZE).enumerate() {
        dst.put_u8(START_MARKER);
        dst.put_slice(chunk);
        dst.put_u8(if i + 1 == frames { STOP_SENTINEL } else { 0x00 });
    }
    Ok(())
}
