use bytes::Bytes;

use crate::layout::Layout;

/// Errors that can occur while parsing layouts or decoding payloads.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A layout spec string contains a symbol other than `f`, `i`, `x`.
    #[error("unknown field symbol '{symbol}' at position {position} in layout \"{spec}\"")]
    UnknownFieldSymbol {
        spec: String,
        position: usize,
        symbol: char,
    },

    /// The buffer's total length does not match the layout's declared length.
    ///
    /// Carries the offending bytes and the attempted layout so callers can
    /// log or re-render the failure without parsing a message string.
    #[error(
        "buffer of {} bytes does not match layout \"{layout}\" ({} bytes), got: {}",
        .buffer.len(),
        .layout.size(),
        hex::encode(.buffer)
    )]
    LengthMismatch { buffer: Bytes, layout: Layout },

    /// A reading has a different number of values than the layout declares.
    #[error("reading has {got} values, layout \"{layout}\" declares {expected}")]
    ValueCountMismatch {
        layout: Layout,
        expected: usize,
        got: usize,
    },

    /// A reading value's type does not match the layout field at its position.
    #[error("value {index} does not match the {expected} field declared by layout \"{layout}\"")]
    ValueTypeMismatch {
        layout: Layout,
        index: usize,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
