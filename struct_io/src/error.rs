//! Error types for record streaming.

use struct_codec::StructError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    /// An error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The format string rejected the data or the values.
    #[error("struct error: {0}")]
    Struct(#[from] StructError),

    /// The stream ended partway through a record.
    #[error("stream ended inside a record: expected {expected} bytes, found {found}")]
    UnexpectedEof { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, RecordError>;
