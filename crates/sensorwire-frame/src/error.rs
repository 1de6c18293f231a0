use crate::frame::{FRAME_PAYLOAD_SIZE, FRAME_SIZE};

/// Errors that can occur during frame splitting/encoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A frame was not exactly [`FRAME_SIZE`] bytes.
    #[error("wrong frame size ({len} bytes, expected {FRAME_SIZE})")]
    WrongFrameSize { len: usize },

    /// A raw burst could not be segmented into whole frames.
    #[error("burst length {len} is not a multiple of the frame size {FRAME_SIZE}")]
    TruncatedBurst { len: usize },

    /// A payload cannot be split into whole frames.
    #[error("payload length {len} is not a multiple of {FRAME_PAYLOAD_SIZE}")]
    PayloadNotFrameAligned { len: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
