//! UART frame handling and payload reassembly.
//!
//! This is the core value-add layer of sensorwire. The microcontroller
//! multiplexes one logical payload across fixed-size frames:
//! - A 1-byte start marker (unconstrained on receive)
//! - 8 payload bytes
//! - A 1-byte trailer; `0x01` marks the last frame of the run
//!
//! [`combine`] turns a run of frames back into the original payload buffer.
//! No length validation against any value layout happens here; that is the
//! decoder's concern.

pub mod error;
pub mod frame;
pub mod reassemble;

pub use error::{FrameError, Result};
pub use frame::{
    encode_frames, split_frames, Frame, FRAME_PAYLOAD_SIZE, FRAME_SIZE, START_MARKER, STOP_SENTINEL,
};
pub use reassemble::{combine, reassemble_burst, Payload};
