//! Sensor telemetry ingestion over a serial link.
//!
//! The microcontroller multiplexes one logical payload across fixed-size
//! framed chunks; sensorwire reassembles the payload and decodes it into
//! typed sensor values, in a strict pipeline:
//!
//! ```text
//! device bytes → combine (frames) → payload buffer → decode (layout) → reading → queue
//! ```
//!
//! The layers live in their own crates and are re-exported here:
//! - [`transport`]: the byte-source abstraction over the device
//! - [`frame`]: frame splitting and payload reassembly
//! - [`layout`]: layout descriptors and payload decoding
//! - [`poller`]: the read-decode-enqueue cycle and outbound queue

pub use sensorwire_frame as frame;
pub use sensorwire_layout as layout;
pub use sensorwire_poller as poller;
pub use sensorwire_transport as transport;

pub use sensorwire_frame::{combine, Frame, Payload, STOP_SENTINEL};
pub use sensorwire_layout::{decode, DecodeStrategy, Layout, SensorReading, Value};
pub use sensorwire_poller::{reading_queue, PollOutcome, SensorPoller};
pub use sensorwire_transport::{ByteSource, ReadSource};
