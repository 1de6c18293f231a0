use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, Result};

/// One field of a binary layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Single-precision float, native byte order, 4 bytes.
    Float32,
    /// Signed 32-bit integer, native byte order, 4 bytes.
    Int32,
    /// One pad byte, skipped on decode, zeroed on encode.
    Pad,
}

impl Field {
    /// Size of the field in bytes.
    pub fn size(self) -> usize {
        match self {
            Field::Float32 | Field::Int32 => 4,
            Field::Pad => 1,
        }
    }

    /// True for pad fields, which carry no value.
    pub fn is_pad(self) -> bool {
        matches!(self, Field::Pad)
    }

    /// The spec-string symbol for this field.
    pub fn symbol(self) -> char {
        match self {
            Field::Float32 => 'f',
            Field::Int32 => 'i',
            Field::Pad => 'x',
        }
    }
}

/// A fixed binary layout agreed out-of-band with the firmware.
///
/// Expressible as a compact spec string: `f` = float32, `i` = int32,
/// `x` = pad byte, with an optional leading `=` (native byte order, the
/// only order supported). The default firmware layout is `xffffiix`:
/// one leading pad, four floats, two ints, one trailing pad (26 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<Field>,
}

impl Layout {
    /// Build a layout from an explicit field list.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Parse a layout spec string.
    pub fn parse(spec: &str) -> Result<Self> {
        let body = spec.strip_prefix('=').unwrap_or(spec);
        let skipped = spec.len() - body.len();

        let mut fields = Vec::with_capacity(body.len());
        for (i, symbol) in body.chars().enumerate() {
            let field = match symbol {
                'f' => Field::Float32,
                'i' => Field::Int32,
                'x' => Field::Pad,
                other => {
                    return Err(DecodeError::UnknownFieldSymbol {
                        spec: spec.to_string(),
                        position: i + skipped,
                        symbol: other,
                    })
                }
            };
            fields.push(field);
        }

        Ok(Self { fields })
    }

    /// The declared fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Total declared byte length.
    pub fn size(&self) -> usize {
        self.fields.iter().map(|f| f.size()).sum()
    }

    /// Number of value-carrying (non-pad) fields.
    pub fn value_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.is_pad()).count()
    }

    /// Iterate fields with their byte offsets.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, Field)> + '_ {
        self.fields.iter().scan(0usize, |offset, &field| {
            let at = *offset;
            *offset += field.size();
            Some((at, field))
        })
    }
}

impl Default for Layout {
    fn default() -> Self {
        use Field::{Float32, Int32, Pad};
        Self::new(vec![
            Pad, Float32, Float32, Float32, Float32, Int32, Int32, Pad,
        ])
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            write!(f, "{}", field.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Layout {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Layout::parse(&spec).map_err(D::Error::custom)
    }
}
