//! Convenience re-exports for common usage

pub use crate::builder::ValuesBuilder;
pub use crate::error::RecordError;
pub use crate::io::{RecordReader, RecordWriter};
pub use crate::iter::RecordIter;

pub use struct_codec::{
    ByteOrder, Layout, StructError, Unpacked, Value, pack, pack_into, packed_size, unpack,
    unpack_at,
};
