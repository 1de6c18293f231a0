use serde::Serialize;

/// One decoded scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    F32(f32),
    I32(i32),
}

impl Value {
    /// The float value, if this is a float field.
    pub fn as_f32(self) -> Option<f32> {
        match self {
            Value::F32(v) => Some(v),
            Value::I32(_) => None,
        }
    }

    /// The integer value, if this is an integer field.
    pub fn as_i32(self) -> Option<i32> {
        match self {
            Value::I32(v) => Some(v),
            Value::F32(_) => None,
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

/// The decoded tuple of scalar values for one payload, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SensorReading {
    values: Vec<Value>,
}

impl SensorReading {
    /// Build a reading from already-decoded values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// The values in layout declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the reading carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }
}

impl From<Vec<Value>> for SensorReading {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a SensorReading {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
