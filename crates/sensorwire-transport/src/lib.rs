//! Serial transport abstraction for sensorwire.
//!
//! Provides a minimal "read whatever bytes are available" interface over the
//! link to the microcontroller. The rest of the stack never touches a device
//! directly; it consumes bursts of bytes from a [`ByteSource`].
//!
//! This is the lowest layer of sensorwire. Failure modes of the underlying
//! device are opaque to the layers above: errors pass through unchanged.

pub mod error;
pub mod source;

pub use error::{Result, TransportError};
pub use source::{ByteSource, ReadSource, ScriptSource};
