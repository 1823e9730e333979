//! # struct_io
//!
//! Record-level helpers on top of [`struct_codec`]: stream records through
//! `std::io`, walk records packed back to back in a buffer, and build value
//! rows.
//!
//! ```rust
//! use std::io::Cursor;
//! use struct_io::prelude::*;
//!
//! let layout = Layout::new("<I4 h").unwrap();
//! let mut writer = RecordWriter::new(Vec::new(), layout.clone());
//! writer.write(&ValuesBuilder::new().uint(1).int(-1).build()).unwrap();
//! writer.write(&ValuesBuilder::new().uint(2).int(-2).build()).unwrap();
//! let bytes = writer.into_inner();
//!
//! let reader = RecordReader::new(Cursor::new(bytes), layout).unwrap();
//! let rows: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
//! assert_eq!(rows[1], [Value::UInt(2), Value::Int(-2)]);
//! ```

pub mod builder;
pub mod error;
pub mod io;
pub mod iter;
pub mod prelude;

pub use crate::builder::ValuesBuilder;
pub use crate::error::{RecordError, Result};
pub use crate::io::{RecordReader, RecordWriter};
pub use crate::iter::RecordIter;

pub use struct_codec;
