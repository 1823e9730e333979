//! Reusable, validated format strings.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use core::fmt;
use core::str::FromStr;

use crate::directive::Scanner;
use crate::error::{Result, StructError};
use crate::size::packed_size;
use crate::value::Value;
use crate::{pack, unpack};

/// A format string checked once up front.
///
/// Construction scans the whole format, so a `Layout` never fails with
/// [`StructError::InvalidFormat`] or [`StructError::InvalidAlignment`] later.
/// The engines still interpret the format on every call.
///
/// ```
/// use struct_codec::{Layout, Value};
///
/// let header = Layout::new("<I4 H c4").unwrap();
/// assert_eq!(header.arity(), 3);
/// assert_eq!(header.size(), Some(10));
///
/// let bytes = header
///     .pack(&[Value::from(7u32), Value::from(2u16), Value::from("RIFF")])
///     .unwrap();
/// assert_eq!(header.unpack(&bytes).unwrap().values[2], Value::from("RIFF"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    format: String,
    arity: usize,
    size: Option<usize>,
}

impl Layout {
    pub fn new(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        let mut arity = 0;
        let mut variable = false;
        for directive in Scanner::new(&format) {
            let directive = directive?;
            arity += directive.takes_value() as usize;
            variable |= directive.is_variable();
        }
        let size = if variable {
            None
        } else {
            Some(packed_size(&format)?)
        };
        Ok(Self {
            format,
            arity,
            size,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.format
    }

    /// Number of values one record consumes and produces.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Packed size of one record, `None` when the layout contains `s` or
    /// `c0`.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Packed size of one record, failing on variable-length layouts.
    pub fn static_size(&self) -> Result<usize> {
        match self.size {
            Some(size) => Ok(size),
            None => packed_size(&self.format),
        }
    }

    pub fn pack(&self, values: &[Value]) -> Result<Vec<u8>> {
        pack::pack(&self.format, values)
    }

    pub fn pack_into(&self, values: &[Value], out: &mut Vec<u8>) -> Result<()> {
        pack::pack_into(&self.format, values, out)
    }

    pub fn unpack(&self, data: &[u8]) -> Result<unpack::Unpacked> {
        unpack::unpack(&self.format, data)
    }

    pub fn unpack_at(&self, data: &[u8], position: usize) -> Result<unpack::Unpacked> {
        unpack::unpack_at(&self.format, data, position)
    }
}

impl FromStr for Layout {
    type Err = StructError;

    fn from_str(s: &str) -> Result<Self> {
        Layout::new(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format)
    }
}
