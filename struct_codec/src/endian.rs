//! Byte order handling for integer and floating point fields.
//!
//! Integers are assembled and split byte by byte in the selected order, so
//! they never pass through a native-order intermediate. Floats are taken in
//! their in-memory layout and reversed only when the selected order is not
//! the host's.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use bytemuck::{Pod, Zeroable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Byte order of the host.
///
/// Found by laying out `0x0102` in memory and looking at which byte lands
/// first.
pub const NATIVE_ORDER: ByteOrder = if 0x0102u16.to_ne_bytes()[0] == 0x02 {
    ByteOrder::Little
} else {
    ByteOrder::Big
};

/// Append the low `width` bytes of `value` in `order`.
pub fn put_uint(out: &mut Vec<u8>, value: u64, width: usize, order: ByteOrder) {
    match order {
        ByteOrder::Little => {
            for i in 0..width {
                out.push((value >> (8 * i)) as u8);
            }
        }
        ByteOrder::Big => {
            for i in (0..width).rev() {
                out.push((value >> (8 * i)) as u8);
            }
        }
    }
}

/// Accumulate `bytes` into an unsigned magnitude read in `order`.
pub fn get_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    let n = bytes.len();
    let mut value = 0u64;
    match order {
        ByteOrder::Big => {
            for i in 0..n {
                value |= (bytes[n - i - 1] as u64) << (8 * i);
            }
        }
        ByteOrder::Little => {
            for (i, &b) in bytes.iter().enumerate() {
                value |= (b as u64) << (8 * i);
            }
        }
    }
    value
}

/// Sign-extend a `width`-byte magnitude.
pub fn sign_extend(value: u64, width: usize) -> i64 {
    let mask = !0u64 << (width * 8 - 1);
    if value & mask != 0 {
        (value | mask) as i64
    } else {
        value as i64
    }
}

/// Reverse `buf` in place unless `order` is the native one.
#[inline]
pub fn correct_bytes(buf: &mut [u8], order: ByteOrder) {
    if order != NATIVE_ORDER {
        buf.reverse();
    }
}

/// Append the in-memory bytes of a float, corrected to `order`.
pub fn put_float<T: Pod>(out: &mut Vec<u8>, value: T, order: ByteOrder) {
    let start = out.len();
    out.extend_from_slice(bytemuck::bytes_of(&value));
    correct_bytes(&mut out[start..], order);
}

/// Read a float stored in `order` from the front of `bytes`.
///
/// `bytes` must hold at least `size_of::<T>()` bytes.
pub fn get_float<T: Pod>(bytes: &[u8], order: ByteOrder) -> T {
    let mut value: T = Zeroable::zeroed();
    let raw = bytemuck::bytes_of_mut(&mut value);
    raw.copy_from_slice(&bytes[..raw.len()]);
    correct_bytes(raw, order);
    value
}
