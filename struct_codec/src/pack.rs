#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, trace};

use crate::align::padding;
use crate::codec;
use crate::context::Context;
use crate::directive::{Kind, Scanner};
use crate::error::{Result, StructError};
use crate::value::Value;

/// Pack `values` according to `format`.
///
/// Values are consumed in directive order; control directives, `x` and
/// spaces take none. Surplus values are ignored. On error nothing is
/// returned.
///
/// ```
/// use struct_codec::{pack, Value};
///
/// let bytes = pack(">Hs", &[Value::from(513u16), Value::from("hi")]).unwrap();
/// assert_eq!(bytes, [2, 1, b'h', b'i', 0]);
/// ```
pub fn pack(format: &str, values: &[Value]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    pack_into(format, values, &mut out)?;
    Ok(out)
}

/// Like [`pack`], appending to `out`.
///
/// Alignment is computed relative to the start of this call's output, not to
/// the start of `out`. On error `out` is restored to its previous length.
pub fn pack_into(format: &str, values: &[Value], out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    let result = pack_fields(format, values, out, start);
    if result.is_err() {
        out.truncate(start);
    }
    result
}

fn pack_fields(format: &str, values: &[Value], out: &mut Vec<u8>, start: usize) -> Result<()> {
    let mut ctx = Context::default();
    let mut args = values.iter().enumerate();

    for directive in Scanner::new(format) {
        let directive = directive?;
        if ctx.apply(&directive) {
            continue;
        }

        let total = out.len() - start;
        let pad = padding(total, &ctx, &directive);
        out.resize(out.len() + pad, 0);
        trace!(
            "pack '{}' at {} (pad {}, {:?})",
            directive.option,
            total + pad,
            pad,
            ctx.order
        );

        match directive.kind {
            Kind::Space => {}
            Kind::Pad => out.push(0),
            _ => {
                let (i, value) = args.next().ok_or(StructError::ArgumentError {
                    index: values.len() + 1,
                    option: directive.option,
                    expected: if matches!(directive.kind, Kind::Fixed | Kind::ZString) {
                        "string"
                    } else {
                        "number"
                    },
                    found: "no value",
                })?;
                codec::encode(out, &directive, ctx.order, value, i + 1)?;
            }
        }
    }

    debug!(
        "packed {} bytes for format {:?} ({} values)",
        out.len() - start,
        format,
        values.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::INT_SIZE;
    use crate::endian::{ByteOrder, NATIVE_ORDER};

    #[test]
    fn endian_directives_switch_mid_scan() {
        let out = pack(">h<h", &[Value::Int(1), Value::Int(1)]).unwrap();
        assert_eq!(out, [0, 1, 1, 0]);
    }

    #[test]
    fn native_order_by_default() {
        let out = pack("i4", &[Value::Int(1)]).unwrap();
        let expected = match NATIVE_ORDER {
            ByteOrder::Little => [1, 0, 0, 0],
            ByteOrder::Big => [0, 0, 0, 1],
        };
        assert_eq!(out, expected);
    }

    #[test]
    fn padding_counts_from_call_start() {
        let mut out = vec![0xAA];
        pack_into("!4bi4", &[Value::Int(1), Value::Int(2)], &mut out).unwrap();
        assert_eq!(out.len(), 1 + 8);
        assert_eq!(&out[2..5], [0, 0, 0]);
    }

    #[test]
    fn pad_and_space_take_no_value() {
        let out = pack("b x b", &[Value::Int(1), Value::Int(2)]).unwrap();
        assert_eq!(out, [1, 0, 2]);
    }

    #[test]
    fn missing_value() {
        let err = pack("bi", &[Value::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            StructError::ArgumentError {
                index: 2,
                option: 'i',
                expected: "number",
                found: "no value"
            }
        );
    }

    #[test]
    fn failure_leaves_buffer_untouched() {
        let mut out = vec![9, 9];
        let err = pack_into("bbq", &[Value::Int(1), Value::Int(2)], &mut out);
        assert!(err.is_err());
        assert_eq!(out, [9, 9]);
    }

    #[test]
    fn default_int_width() {
        assert_eq!(pack("i", &[Value::Int(0)]).unwrap().len(), INT_SIZE);
    }
}
