use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{DecodeError, Result};
use crate::layout::{Field, Layout};
use crate::reading::{SensorReading, Value};

/// Turns a payload buffer into a reading, per some validation policy.
///
/// The seam exists so the permissive length-only policy below can be
/// replaced with a checksum- or tag-validated one without touching the
/// frame reassembly layer.
pub trait DecodeStrategy {
    /// Decode `buf` as one flat binary record described by `layout`.
    fn decode(&self, buf: &[u8], layout: &Layout) -> Result<SensorReading>;
}

/// The stock decoder: accepts any buffer whose total length equals the
/// layout's declared length.
///
/// This mirrors the firmware contract and is deliberately permissive — it
/// does **not** verify that field boundaries are semantically meaningful.
/// A buffer of the correct total length but the wrong field arrangement
/// decodes without error and silently produces wrong values. Callers that
/// need correctness beyond "did not fail" must layer their own sanity
/// checks (value ranges, checksums, a frame-count invariant) on top.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveDecoder;

impl DecodeStrategy for PermissiveDecoder {
    fn decode(&self, buf: &[u8], layout: &Layout) -> Result<SensorReading> {
        if buf.len() != layout.size() {
            return Err(DecodeError::LengthMismatch {
                buffer: Bytes::copy_from_slice(buf),
                layout: layout.clone(),
            });
        }

        let mut values = Vec::with_capacity(layout.value_count());
        for (offset, field) in layout.offsets() {
            // Offsets are in bounds: total length was validated above.
            match field {
                Field::Pad => {}
                Field::Float32 => {
                    let raw = buf[offset..offset + 4].try_into().unwrap();
                    values.push(Value::F32(f32::from_ne_bytes(raw)));
                }
                Field::Int32 => {
                    let raw = buf[offset..offset + 4].try_into().unwrap();
                    values.push(Value::I32(i32::from_ne_bytes(raw)));
                }
            }
        }

        Ok(SensorReading::new(values))
    }
}

/// Decode a payload buffer with the stock permissive policy.
pub fn decode(buf: &[u8], layout: &Layout) -> Result<SensorReading> {
    PermissiveDecoder.decode(buf, layout)
}

/// Encode a reading into the flat binary record described by `layout`.
///
/// The firmware-side inverse of [`decode`], used for loopback tests and
/// capture generation. Pad bytes are written as zero.
pub fn encode_reading(reading: &SensorReading, layout: &Layout) -> Result<Bytes> {
    if reading.len() != layout.value_count() {
        return Err(DecodeError::ValueCountMismatch {
            layout: layout.clone(),
            expected: layout.value_count(),
            got: reading.len(),
        });
    }

    let mut buf = BytesMut::with_capacity(layout.size());
    let mut values = reading.values().iter();
    for (index, field) in layout.fields().iter().enumerate() {
        match field {
            Field::Pad => buf.put_u8(0),
            Field::Float32 => match values.next() {
                Some(Value::F32(v)) => buf.put_slice(&v.to_ne_bytes()),
                _ => {
                    return Err(DecodeError::ValueTypeMismatch {
                        layout: layout.clone(),
                        index,
                        expected: "float32",
                    })
                }
            },
            Field::Int32 => match values.next() {
                Some(Value::I32(v)) => buf.put_slice(&v.to_ne_bytes()),
                _ => {
                    return Err(DecodeError::ValueTypeMismatch {
                        layout: layout.clone(),
                        index,
                        expected: "int32",
                    })
                }
            },
        }
    }

    Ok(buf.freeze())
}
