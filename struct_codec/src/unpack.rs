#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, trace};

use crate::align::padding;
use crate::codec;
use crate::context::Context;
use crate::directive::{Directive, Kind, Scanner};
use crate::error::{Result, StructError};
use crate::value::Value;

/// Values produced by one unpack call.
#[derive(Debug, Clone, PartialEq)]
pub struct Unpacked {
    pub values: Vec<Value>,
    /// 1-indexed position of the first byte after the last field.
    pub next: usize,
}

impl Unpacked {
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Unpack `data` according to `format`, starting at the first byte.
///
/// ```
/// use struct_codec::{unpack, Value};
///
/// let out = unpack("Bc0", &[5, b'h', b'e', b'l', b'l', b'o']).unwrap();
/// assert_eq!(out.values, [Value::UInt(5), Value::from("hello")]);
/// assert_eq!(out.next, 7);
/// ```
pub fn unpack(format: &str, data: &[u8]) -> Result<Unpacked> {
    unpack_at(format, data, 1)
}

/// Unpack `data` according to `format`, starting at the 1-indexed
/// `position`.
pub fn unpack_at(format: &str, data: &[u8], position: usize) -> Result<Unpacked> {
    if position == 0 {
        return Err(StructError::InvalidPosition(position));
    }

    let mut ctx = Context::default();
    let mut pos = position - 1;
    let mut values = Vec::new();
    // Index into `values` of the last produced value, until a `c0` takes it.
    let mut binding: Option<usize> = None;

    for directive in Scanner::new(format) {
        let directive = directive?;
        if ctx.apply(&directive) {
            check_bounds(data, pos, 0, &directive)?;
            continue;
        }

        pos = pos
            .checked_add(padding(pos, &ctx, &directive))
            .ok_or_else(|| too_short(data, pos, directive.size, &directive))?;
        check_bounds(data, pos, directive.size, &directive)?;
        trace!(
            "unpack '{}' at {} ({:?})",
            directive.option,
            pos,
            ctx.order
        );

        let mut size = directive.size;
        match directive.kind {
            Kind::Space => continue,
            Kind::Pad => {
                pos += size;
                continue;
            }
            Kind::Fixed if size == 0 => {
                size = binding
                    .take()
                    .and_then(|i| values.get(i))
                    .and_then(Value::as_length)
                    .ok_or(StructError::UnboundLength {
                        offset: directive.offset,
                    })?;
                check_bounds(data, pos, size, &directive)?;
            }
            _ => {}
        }

        let (value, consumed) = codec::decode(&data[pos..], &directive, size, ctx.order, pos)?;
        binding = Some(values.len());
        values.push(value);
        pos += consumed;
    }

    debug!(
        "unpacked {} values from {} bytes for format {:?}",
        values.len(),
        data.len(),
        format
    );
    Ok(Unpacked {
        values,
        next: pos + 1,
    })
}

fn check_bounds(data: &[u8], pos: usize, size: usize, directive: &Directive) -> Result<()> {
    match pos.checked_add(size) {
        Some(end) if end <= data.len() => Ok(()),
        _ => Err(too_short(data, pos, size, directive)),
    }
}

fn too_short(data: &[u8], pos: usize, size: usize, directive: &Directive) -> StructError {
    StructError::BufferTooShort {
        option: directive.option,
        position: pos,
        needed: size,
        available: data.len().saturating_sub(pos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extension() {
        assert_eq!(unpack("b", &[0xFF]).unwrap().values, [Value::Int(-1)]);
        assert_eq!(unpack("B", &[0xFF]).unwrap().values, [Value::UInt(255)]);
    }

    #[test]
    fn next_position_is_one_indexed() {
        let out = unpack_at(">H", &[0, 0, 1, 2], 3).unwrap();
        assert_eq!(out.values, [Value::UInt(0x0102)]);
        assert_eq!(out.next, 5);

        let out = unpack("", &[1, 2]).unwrap();
        assert_eq!(out.next, 1);
    }

    #[test]
    fn position_zero_is_rejected() {
        assert_eq!(
            unpack_at("b", &[1], 0).unwrap_err(),
            StructError::InvalidPosition(0)
        );
    }

    #[test]
    fn huge_position_fails_instead_of_overflowing() {
        assert!(matches!(
            unpack_at("!4i4", &[0u8; 4], usize::MAX),
            Err(StructError::BufferTooShort { available: 0, .. })
        ));
        assert!(matches!(
            unpack_at("!8 b d", &[0u8; 16], usize::MAX - 1),
            Err(StructError::BufferTooShort { .. })
        ));
    }

    #[test]
    fn controls_are_bounds_checked() {
        assert!(matches!(
            unpack_at(">", &[1], 5),
            Err(StructError::BufferTooShort {
                option: '>',
                needed: 0,
                ..
            })
        ));
        // One past the end is still a valid start.
        let out = unpack_at("<!4", &[1], 2).unwrap();
        assert_eq!(out.next, 2);
        assert!(out.values.is_empty());
    }

    #[test]
    fn padding_bytes_are_skipped_unread() {
        let [a, b, c, d] = 2i32.to_ne_bytes();
        let data = [1, 0xEE, 0xEE, 0xEE, a, b, c, d];
        let out = unpack("!4 b i4", &data).unwrap();
        assert_eq!(out.values, [Value::Int(1), Value::Int(2)]);
        assert_eq!(out.next, 9);
    }

    #[test]
    fn buffer_too_short() {
        let err = unpack("i4", &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            StructError::BufferTooShort {
                option: 'i',
                position: 0,
                needed: 4,
                available: 2
            }
        );
        // Padding counts against the input as well.
        assert!(unpack("!4bh i4", &[1, 0, 0, 0, 0, 0]).is_err());
        // A start past the end leaves nothing available.
        assert!(matches!(
            unpack_at("b", &[1], 5),
            Err(StructError::BufferTooShort { available: 0, .. })
        ));
    }

    #[test]
    fn pad_skips_without_reading() {
        let out = unpack("bxb", &[1, 0xEE, 2]).unwrap();
        assert_eq!(out.values, [Value::Int(1), Value::Int(2)]);
        assert_eq!(out.next, 4);
    }

    #[test]
    fn length_binding_is_consumed_once() {
        assert_eq!(
            unpack("c0", b"abc").unwrap_err(),
            StructError::UnboundLength { offset: 0 }
        );
        // The `c0` result becomes the new binding, and it is not a number.
        assert!(matches!(
            unpack("Bc0c0", &[1, b'a', b'b']),
            Err(StructError::UnboundLength { offset: 3 })
        ));
        let out = unpack("BBc0", &[9, 2, b'h', b'i']).unwrap();
        assert_eq!(
            out.values,
            [Value::UInt(9), Value::UInt(2), Value::from("hi")]
        );
    }

    #[test]
    fn length_binding_checks_bounds() {
        assert!(matches!(
            unpack("Bc0", &[10, b'a']),
            Err(StructError::BufferTooShort { needed: 10, .. })
        ));
        assert!(matches!(
            unpack("bc0", &[0xFF, b'a']),
            Err(StructError::UnboundLength { .. })
        ));
    }

    #[test]
    fn length_binding_reaches_past_unrelated_fields() {
        // The binding is the last produced value, wherever it came from.
        let out = unpack(">H x s c0", &[0, 3, 0, b'a', 0, b'x', b'y', b'z']);
        assert!(matches!(out, Err(StructError::UnboundLength { .. })));

        let out = unpack("<B f c0", &[0, 0, 0, 0x40, 0x40, b'a', b'b', b'c']).unwrap();
        assert_eq!(out.values[2], Value::from("abc"));
    }
}
