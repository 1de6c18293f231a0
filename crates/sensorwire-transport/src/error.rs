use std::path::PathBuf;

/// Errors that can occur on the serial transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the device at the specified path.
    #[error("failed to open device {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred while reading from the device.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device was closed or disconnected.
    #[error("device closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
