#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised while interpreting a format string.
///
/// Every variant names the control character it was raised for and, where it
/// applies, the byte offset of that character inside the format string.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructError {
    #[cfg_attr(
        feature = "std",
        error("invalid format option '{option}' at offset {offset}")
    )]
    InvalidFormat { option: char, offset: usize },

    #[cfg_attr(
        feature = "std",
        error("size {size} of option '{option}' at offset {offset} is not a power of 2")
    )]
    InvalidAlignment {
        option: char,
        offset: usize,
        size: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("integral size {size} of option '{option}' at offset {offset} exceeds the {max}-byte (64-bit) accumulator")
    )]
    IntegerTooWide {
        option: char,
        offset: usize,
        size: usize,
        max: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("bad argument #{index} to option '{option}': {expected} expected, got {found}")
    )]
    ArgumentError {
        index: usize,
        option: char,
        expected: &'static str,
        found: &'static str,
    },

    #[cfg_attr(
        feature = "std",
        error("bad argument #{index} to option '{option}': string of {actual} bytes is shorter than {declared}")
    )]
    LengthMismatch {
        index: usize,
        option: char,
        declared: usize,
        actual: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("option 'c0' at offset {offset} needs a previous size")
    )]
    UnboundLength { offset: usize },

    #[cfg_attr(
        feature = "std",
        error("unfinished string starting at byte {position}")
    )]
    UnterminatedString { position: usize },

    #[cfg_attr(
        feature = "std",
        error("data too short for option '{option}': need {needed} bytes at {position}, have {available}")
    )]
    BufferTooShort {
        option: char,
        position: usize,
        needed: usize,
        available: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("option '{option}' at offset {offset} has no static size")
    )]
    VariableLength { option: char, offset: usize },

    #[cfg_attr(feature = "std", error("position {0} is out of range (positions start at 1)"))]
    InvalidPosition(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StructError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StructError::InvalidFormat { option, offset } => {
                write!(f, "invalid format option '{}' at offset {}", option, offset)
            }
            StructError::InvalidAlignment {
                option,
                offset,
                size,
            } => write!(
                f,
                "size {} of option '{}' at offset {} is not a power of 2",
                size, option, offset
            ),
            StructError::IntegerTooWide {
                option,
                offset,
                size,
                max,
            } => write!(
                f,
                "integral size {} of option '{}' at offset {} exceeds the {}-byte (64-bit) accumulator",
                size, option, offset, max
            ),
            StructError::ArgumentError {
                index,
                option,
                expected,
                found,
            } => write!(
                f,
                "bad argument #{} to option '{}': {} expected, got {}",
                index, option, expected, found
            ),
            StructError::LengthMismatch {
                index,
                option,
                declared,
                actual,
            } => write!(
                f,
                "bad argument #{} to option '{}': string of {} bytes is shorter than {}",
                index, option, actual, declared
            ),
            StructError::UnboundLength { offset } => {
                write!(f, "option 'c0' at offset {} needs a previous size", offset)
            }
            StructError::UnterminatedString { position } => {
                write!(f, "unfinished string starting at byte {}", position)
            }
            StructError::BufferTooShort {
                option,
                position,
                needed,
                available,
            } => write!(
                f,
                "data too short for option '{}': need {} bytes at {}, have {}",
                option, needed, position, available
            ),
            StructError::VariableLength { option, offset } => {
                write!(f, "option '{}' at offset {} has no static size", option, offset)
            }
            StructError::InvalidPosition(p) => {
                write!(f, "position {} is out of range (positions start at 1)", p)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, StructError>;

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn integer_width_message_names_accumulator() {
        let err = StructError::IntegerTooWide {
            option: 'i',
            offset: 0,
            size: 16,
            max: 8,
        };
        assert_eq!(
            err.to_string(),
            "integral size 16 of option 'i' at offset 0 exceeds the 8-byte (64-bit) accumulator"
        );
    }
}
