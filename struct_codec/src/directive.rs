//! Format string scanner.
//!
//! The format is read left to right, one control character plus an optional
//! decimal suffix per step. Nothing is materialized: the engines pull
//! directives from a [`Scanner`] as they go.

use core::ffi::{c_int, c_long, c_short};
use core::mem::{offset_of, size_of};

use crate::error::{Result, StructError};

/// Width used by `i`/`I` without a suffix.
pub const INT_SIZE: usize = size_of::<c_int>();
pub const SHORT_SIZE: usize = size_of::<c_short>();
pub const LONG_SIZE: usize = size_of::<c_long>();

/// Widest integer the codec can transcode.
pub const MAX_INT_SIZE: usize = size_of::<u64>();

#[repr(C)]
#[allow(dead_code)]
struct AlignProbe {
    c: u8,
    d: f64,
}

const DOUBLE_PADDING: usize = offset_of!(AlignProbe, d);

/// Alignment selected by a bare `!`: the larger of the pointer width and the
/// padding a C compiler puts in front of a `double`.
pub const MAX_ALIGN: usize = if DOUBLE_PADDING > size_of::<usize>() {
    DOUBLE_PADDING
} else {
    size_of::<usize>()
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `>`
    BigEndian,
    /// `<`
    LittleEndian,
    /// `!n`
    Align(usize),
    /// `x`
    Pad,
    /// `b B h H l L i I`
    Int { signed: bool },
    /// `f`
    Float,
    /// `d`
    Double,
    /// `cn`
    Fixed,
    /// `s`
    ZString,
    /// ` `
    Space,
}

/// One parsed step of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub option: char,
    /// Byte offset of `option` in the format string.
    pub offset: usize,
    pub kind: Kind,
    /// Bytes the field occupies. Zero for control directives and `s`; for
    /// `c` it is the declared length, where zero defers to the value.
    pub size: usize,
}

impl Directive {
    /// Whether the directive consumes a value on pack and produces one on
    /// unpack.
    pub fn takes_value(&self) -> bool {
        matches!(
            self.kind,
            Kind::Int { .. } | Kind::Float | Kind::Double | Kind::Fixed | Kind::ZString
        )
    }

    /// Whether the packed size depends on the value (`s`, `c0`).
    pub fn is_variable(&self) -> bool {
        match self.kind {
            Kind::ZString => true,
            Kind::Fixed => self.size == 0,
            _ => false,
        }
    }
}

#[inline]
pub fn is_power_of_two(x: usize) -> bool {
    x > 0 && x & (x - 1) == 0
}

/// Lazily yields the directives of a format string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    fmt: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(fmt: &'a str) -> Self {
        Self { fmt, pos: 0 }
    }

    /// Greedily read a decimal suffix, `default` when there is none.
    fn number(&mut self, option: char, offset: usize, default: usize) -> Result<usize> {
        let digits = self.fmt.as_bytes()[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Ok(default);
        }

        let mut n: usize = 0;
        for &b in &self.fmt.as_bytes()[self.pos..self.pos + digits] {
            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add((b - b'0') as usize))
                .ok_or(StructError::InvalidFormat { option, offset })?;
        }
        self.pos += digits;
        Ok(n)
    }

    fn integer(&mut self, option: char, offset: usize, default: usize) -> Result<Directive> {
        let size = self.number(option, offset, default)?;
        if !is_power_of_two(size) {
            return Err(StructError::InvalidAlignment {
                option,
                offset,
                size,
            });
        }
        if size > MAX_INT_SIZE {
            return Err(StructError::IntegerTooWide {
                option,
                offset,
                size,
                max: MAX_INT_SIZE,
            });
        }
        Ok(Directive {
            option,
            offset,
            kind: Kind::Int {
                signed: option.is_ascii_lowercase(),
            },
            size,
        })
    }

    fn parse(&mut self, option: char, offset: usize) -> Result<Directive> {
        let fixed = |kind, size| Directive {
            option,
            offset,
            kind,
            size,
        };
        let signed = option.is_ascii_lowercase();

        let directive = match option {
            '>' => fixed(Kind::BigEndian, 0),
            '<' => fixed(Kind::LittleEndian, 0),
            ' ' => fixed(Kind::Space, 0),
            'x' => fixed(Kind::Pad, 1),
            'b' | 'B' => fixed(Kind::Int { signed }, 1),
            'h' | 'H' => fixed(Kind::Int { signed }, SHORT_SIZE),
            'l' | 'L' => fixed(Kind::Int { signed }, LONG_SIZE),
            'i' | 'I' => self.integer(option, offset, INT_SIZE)?,
            'f' => fixed(Kind::Float, size_of::<f32>()),
            'd' => fixed(Kind::Double, size_of::<f64>()),
            's' => fixed(Kind::ZString, 0),
            'c' => {
                let n = self.number(option, offset, 1)?;
                fixed(Kind::Fixed, n)
            }
            '!' => {
                let align = self.number(option, offset, MAX_ALIGN)?;
                if !is_power_of_two(align) {
                    return Err(StructError::InvalidAlignment {
                        option,
                        offset,
                        size: align,
                    });
                }
                fixed(Kind::Align(align), 0)
            }
            _ => return Err(StructError::InvalidFormat { option, offset }),
        };
        Ok(directive)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Directive>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        let option = self.fmt[offset..].chars().next()?;
        self.pos += option.len_utf8();

        let parsed = self.parse(option, offset);
        if parsed.is_err() {
            // Stop scanning after the first error.
            self.pos = self.fmt.len();
        }
        Some(parsed)
    }
}
