/// Errors surfaced by one poll cycle.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Transport-level error, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] sensorwire_transport::TransportError),

    /// The burst could not be segmented into frames.
    #[error("frame error: {0}")]
    Frame(#[from] sensorwire_frame::FrameError),

    /// The payload buffer did not match the layout.
    #[error("decode error: {0}")]
    Decode(#[from] sensorwire_layout::DecodeError),

    /// The consumer side of the outbound queue is gone.
    #[error("outbound queue closed")]
    QueueClosed,
}

pub type Result<T> = std::result::Result<T, PollError>;
