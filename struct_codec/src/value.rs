//! Values exchanged with the pack and unpack engines.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// A scalar or byte string consumed by [`pack`](crate::pack::pack) or produced by
/// [`unpack`](crate::unpack::unpack).
///
/// Signed integer options unpack to `Int`, unsigned ones to `UInt`, `f`/`d`
/// to `Float` and `c`/`s` to `Bytes`. Packing accepts any numeric variant for
/// any numeric option.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl Value {
    /// Short name of the variant, used in argument errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) | Value::UInt(_) | Value::Float(_) => "number",
            Value::Bytes(_) => "string",
        }
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, Value::Bytes(_))
    }

    /// Signed view of an integer value. Floats and bytes yield `None`, as do
    /// `UInt` values above `i64::MAX`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            Value::UInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Unsigned view of an integer value. Negative `Int` values yield `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Int(v) => u64::try_from(v).ok(),
            Value::UInt(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::UInt(v) => Some(v as f64),
            Value::Float(v) => Some(v),
            Value::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Raw bit pattern written by the integer options.
    ///
    /// Floats truncate toward zero: below `i64::MAX` through `i64`, above it
    /// through `u64`. Both casts saturate and NaN becomes 0.
    pub(crate) fn integer_bits(&self) -> Option<u64> {
        match *self {
            Value::Int(v) => Some(v as u64),
            Value::UInt(v) => Some(v),
            Value::Float(v) => {
                if v < i64::MAX as f64 {
                    Some(v as i64 as u64)
                } else {
                    Some(v as u64)
                }
            }
            Value::Bytes(_) => None,
        }
    }

    /// Interpret this value as a `c0` length.
    pub(crate) fn as_length(&self) -> Option<usize> {
        match *self {
            Value::Int(v) => usize::try_from(v).ok(),
            Value::UInt(v) => usize::try_from(v).ok(),
            Value::Float(v) if v >= 0.0 => {
                let n = v as usize;
                (n as f64 == v).then_some(n)
            }
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_int!(Int => i8, i16, i32, i64);
impl_from_int!(UInt => u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(v: &[u8; N]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Bytes(v.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Bytes(v.into_bytes())
    }
}
