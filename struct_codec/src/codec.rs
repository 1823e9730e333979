//! Encoding and decoding of the value-bearing fields.
//!
//! Padding, whitespace and the control directives carry no value and are
//! handled by the engines directly.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::trace;

use crate::directive::{Directive, Kind};
use crate::endian::{self, ByteOrder};
use crate::error::{Result, StructError};
use crate::value::Value;

/// Append `value` encoded as `directive`.
///
/// `index` is the 1-based position of `value` in the caller's value list and
/// only feeds error messages.
pub fn encode(
    out: &mut Vec<u8>,
    directive: &Directive,
    order: ByteOrder,
    value: &Value,
    index: usize,
) -> Result<()> {
    let mismatch = |expected| StructError::ArgumentError {
        index,
        option: directive.option,
        expected,
        found: value.kind(),
    };

    match directive.kind {
        Kind::Int { .. } => {
            let bits = value.integer_bits().ok_or_else(|| mismatch("number"))?;
            endian::put_uint(out, bits, directive.size, order);
        }
        Kind::Float => {
            let v = value.as_f64().ok_or_else(|| mismatch("number"))?;
            endian::put_float(out, v as f32, order);
        }
        Kind::Double => {
            let v = value.as_f64().ok_or_else(|| mismatch("number"))?;
            endian::put_float(out, v, order);
        }
        Kind::Fixed | Kind::ZString => {
            let bytes = value.as_bytes().ok_or_else(|| mismatch("string"))?;
            let size = if directive.size == 0 {
                bytes.len()
            } else {
                directive.size
            };
            if bytes.len() < size {
                return Err(StructError::LengthMismatch {
                    index,
                    option: directive.option,
                    declared: size,
                    actual: bytes.len(),
                });
            }
            out.extend_from_slice(&bytes[..size]);
            if directive.kind == Kind::ZString {
                out.push(0);
            }
            trace!("'{}' wrote {} string bytes", directive.option, size);
        }
        _ => {}
    }
    Ok(())
}

/// Decode one field from the front of `field`.
///
/// `size` is the resolved field size: the directive's own size, or the bound
/// length for `c0`. Returns the value and the number of bytes consumed.
/// `position` is the absolute cursor and only feeds error messages.
pub fn decode(
    field: &[u8],
    directive: &Directive,
    size: usize,
    order: ByteOrder,
    position: usize,
) -> Result<(Value, usize)> {
    let bytes = field.get(..size).ok_or(StructError::BufferTooShort {
        option: directive.option,
        position,
        needed: size,
        available: field.len(),
    })?;

    let decoded = match directive.kind {
        Kind::Int { signed } => {
            let raw = endian::get_uint(bytes, order);
            let value = if signed {
                Value::Int(endian::sign_extend(raw, size))
            } else {
                Value::UInt(raw)
            };
            (value, size)
        }
        Kind::Float => (
            Value::Float(endian::get_float::<f32>(bytes, order).into()),
            size,
        ),
        Kind::Double => (Value::Float(endian::get_float::<f64>(bytes, order)), size),
        Kind::Fixed => (Value::Bytes(bytes.to_vec()), size),
        Kind::ZString => {
            let end = field
                .iter()
                .position(|&b| b == 0)
                .ok_or(StructError::UnterminatedString { position })?;
            (Value::Bytes(field[..end].to_vec()), end + 1)
        }
        // Controls, padding and whitespace produce nothing.
        _ => {
            return Err(StructError::InvalidFormat {
                option: directive.option,
                offset: directive.offset,
            });
        }
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Scanner;

    fn first(fmt: &str) -> Directive {
        Scanner::new(fmt).next().unwrap().unwrap()
    }

    #[test]
    fn integer_truncates_and_orders() {
        let mut out = Vec::new();
        encode(&mut out, &first("h"), ByteOrder::Big, &Value::Int(-2), 1).unwrap();
        assert_eq!(out, [0xFF, 0xFE]);

        let (v, n) = decode(&out, &first("h"), 2, ByteOrder::Big, 0).unwrap();
        assert_eq!((v, n), (Value::Int(-2), 2));
        let (v, _) = decode(&out, &first("H"), 2, ByteOrder::Big, 0).unwrap();
        assert_eq!(v, Value::UInt(0xFFFE));
    }

    #[test]
    fn fixed_block_takes_prefix() {
        let mut out = Vec::new();
        encode(&mut out, &first("c3"), ByteOrder::Little, &Value::from("hello"), 1).unwrap();
        assert_eq!(out, b"hel");

        let err = encode(&mut out, &first("c9"), ByteOrder::Little, &Value::from("hi"), 4)
            .unwrap_err();
        assert_eq!(
            err,
            StructError::LengthMismatch {
                index: 4,
                option: 'c',
                declared: 9,
                actual: 2
            }
        );
    }

    #[test]
    fn zstring_keeps_interior_bytes() {
        let mut out = Vec::new();
        encode(&mut out, &first("s"), ByteOrder::Little, &Value::from(&b"a\0b"[..]), 1).unwrap();
        assert_eq!(out, b"a\0b\0");

        let (v, n) = decode(&out, &first("s"), 0, ByteOrder::Little, 0).unwrap();
        assert_eq!(v, Value::from("a"));
        assert_eq!(n, 2);
    }

    #[test]
    fn unterminated_string() {
        let err = decode(b"abc", &first("s"), 0, ByteOrder::Little, 7).unwrap_err();
        assert_eq!(err, StructError::UnterminatedString { position: 7 });
    }

    #[test]
    fn shape_mismatch() {
        let mut out = Vec::new();
        let err = encode(&mut out, &first("d"), ByteOrder::Big, &Value::from("x"), 2).unwrap_err();
        assert_eq!(
            err,
            StructError::ArgumentError {
                index: 2,
                option: 'd',
                expected: "number",
                found: "string"
            }
        );
        let err = encode(&mut out, &first("s"), ByteOrder::Big, &Value::Int(1), 1).unwrap_err();
        assert!(matches!(err, StructError::ArgumentError { expected: "string", .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn decode_rejects_short_input_and_valueless_options() {
        assert_eq!(
            decode(&[1, 2], &first("i4"), 4, ByteOrder::Big, 3).unwrap_err(),
            StructError::BufferTooShort {
                option: 'i',
                position: 3,
                needed: 4,
                available: 2
            }
        );
        assert_eq!(
            decode(&[], &first(">"), 0, ByteOrder::Big, 0).unwrap_err(),
            StructError::InvalidFormat {
                option: '>',
                offset: 0
            }
        );
        assert!(decode(&[0], &first("x"), 1, ByteOrder::Big, 0).is_err());
    }
}
