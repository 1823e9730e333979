//! Fluent construction of value rows.

use struct_codec::Value;

/// Builds the `Vec<Value>` one record packs from.
///
/// ```
/// use struct_io::ValuesBuilder;
/// use struct_codec::{pack, Value};
///
/// let row = ValuesBuilder::new().uint(3).int(-1).string("ok").build();
/// assert_eq!(row[1], Value::Int(-1));
/// assert_eq!(pack(">B b s", &row).unwrap(), [3, 0xFF, b'o', b'k', 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuesBuilder {
    values: Vec<Value>,
}

impl ValuesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn int(self, v: i64) -> Self {
        self.push(Value::Int(v))
    }

    pub fn uint(self, v: u64) -> Self {
        self.push(Value::UInt(v))
    }

    pub fn float(self, v: f64) -> Self {
        self.push(Value::Float(v))
    }

    pub fn bytes(self, v: impl Into<Vec<u8>>) -> Self {
        self.push(Value::Bytes(v.into()))
    }

    pub fn string(self, v: &str) -> Self {
        self.push(Value::from(v))
    }

    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn extend<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn build(self) -> Vec<Value> {
        self.values
    }
}
