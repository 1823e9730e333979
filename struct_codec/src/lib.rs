//! # struct_codec
//!
//! Pack and unpack binary records described by a compact format string,
//! in the spirit of C's `printf` formats.
//!
//! ```rust
//! use struct_codec::{pack, unpack, Value};
//!
//! // A little-endian record: u16 id, 4-byte tag, zero-terminated name.
//! let bytes = pack("<H c4 s", &[
//!     Value::from(42u16),
//!     Value::from("TAG1"),
//!     Value::from("probe"),
//! ]).unwrap();
//! assert_eq!(&bytes[..6], &[42, 0, b'T', b'A', b'G', b'1']);
//!
//! let out = unpack("<H c4 s", &bytes).unwrap();
//! assert_eq!(out.values[0], Value::UInt(42));
//! assert_eq!(out.values[2], Value::from("probe"));
//! assert_eq!(out.next, bytes.len() + 1);
//! ```
//!
//! ## Format Strings
//!
//! Character | Meaning
//! --------- | -------
//! `>`       | big endian
//! `<`       | little endian
//! `!n`      | alignment ceiling `n` (power of 2, default [`MAX_ALIGN`])
//! `x`       | one pad byte
//! `b`/`B`   | signed/unsigned byte
//! `h`/`H`   | signed/unsigned `short`
//! `l`/`L`   | signed/unsigned `long`
//! `i`/`I`   | signed/unsigned integer of `n` bytes (`in`, default size of `int`)
//! `cn`      | `n` raw bytes; `c0` is the whole string on pack, the previous value on unpack
//! `s`       | zero-terminated string
//! `f`       | `float`
//! `d`       | `double`
//! ` `       | ignored
//!
//! Every call starts in native byte order with an alignment ceiling of 1,
//! so nothing is padded until a `!` appears. A field is aligned to the
//! smaller of its size and the ceiling; `c` blocks are never aligned.
//!
//! ## Features
//! - `std` (default): `std::error::Error` for [`StructError`] via `thiserror`.
//!   Without it the crate is `no_std` and needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod align;
mod codec;
pub mod context;
pub mod directive;
pub mod endian;
pub mod error;
pub mod layout;
pub mod pack;
pub mod size;
pub mod unpack;
pub mod value;

pub use context::Context;
pub use directive::{Directive, Kind, MAX_ALIGN, Scanner};
pub use endian::{ByteOrder, NATIVE_ORDER};
pub use error::{Result, StructError};
pub use layout::Layout;
pub use pack::{pack, pack_into};
pub use size::packed_size;
pub use unpack::{Unpacked, unpack, unpack_at};
pub use value::Value;
