use log::trace;

use crate::align::padding;
use crate::context::Context;
use crate::directive::Scanner;
use crate::error::{Result, StructError};

/// Number of bytes [`pack`](crate::pack::pack) produces for `format`, padding included.
///
/// Formats containing `s` or `c0` have no size independent of their values
/// and fail with [`StructError::VariableLength`].
///
/// ```
/// use struct_codec::packed_size;
///
/// assert_eq!(packed_size(">!4 b i4 c3").unwrap(), 11);
/// assert!(packed_size("Bc0").is_err());
/// ```
pub fn packed_size(format: &str) -> Result<usize> {
    let mut ctx = Context::default();
    let mut total = 0usize;

    for directive in Scanner::new(format) {
        let directive = directive?;
        if ctx.apply(&directive) {
            continue;
        }
        if directive.is_variable() {
            return Err(StructError::VariableLength {
                option: directive.option,
                offset: directive.offset,
            });
        }
        total += padding(total, &ctx, &directive) + directive.size;
    }

    trace!("format {:?} packs to {} bytes", format, total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{INT_SIZE, LONG_SIZE, MAX_ALIGN};

    #[test]
    fn sums_fields() {
        assert_eq!(packed_size("").unwrap(), 0);
        assert_eq!(packed_size("bBx").unwrap(), 3);
        assert_eq!(packed_size("i").unwrap(), INT_SIZE);
        assert_eq!(packed_size("lL").unwrap(), 2 * LONG_SIZE);
        assert_eq!(packed_size("fd c5").unwrap(), 17);
    }

    #[test]
    fn includes_alignment() {
        assert_eq!(packed_size("!4bi4").unwrap(), 8);
        assert_eq!(packed_size("!2bi4").unwrap(), 6);
        assert_eq!(packed_size("!bd").unwrap(), 8 + 8.min(MAX_ALIGN));
        // Byte blocks are never aligned.
        assert_eq!(packed_size("!8bc2").unwrap(), 3);
    }

    #[test]
    fn variable_directives() {
        assert_eq!(
            packed_size("bs").unwrap_err(),
            StructError::VariableLength {
                option: 's',
                offset: 1
            }
        );
        assert!(packed_size("c0").is_err());
    }
}
