//! Binary layout descriptors and payload decoding.
//!
//! A [`Layout`] is the out-of-band contract with the transmitting firmware:
//! an ordered list of scalar fields (`float32`, `int32`) and fixed pad
//! bytes, native byte order, no implicit alignment. [`decode`] turns a
//! reassembled payload buffer into one [`SensorReading`] per that contract.
//!
//! Decoding is deliberately permissive: any buffer whose total length equals
//! the layout's declared length decodes without error, even if the field
//! arrangement is wrong. The [`DecodeStrategy`] trait exists so a stricter
//! (checksum- or tag-validated) variant can replace [`PermissiveDecoder`]
//! without touching the reassembly layer.

pub mod decode;
pub mod error;
pub mod layout;
pub mod reading;

pub use decode::{decode, encode_reading, DecodeStrategy, PermissiveDecoder};
pub use error::{DecodeError, Result};
pub use layout::{Field, Layout};
pub use reading::{SensorReading, Value};
