//! Streaming records through `std::io` readers and writers.

use std::io::{self, Read, Write};

use log::{debug, trace};
use struct_codec::{Layout, Value};

use crate::error::{RecordError, Result};

/// Packs records with one [`Layout`] and writes them to `W`.
///
/// Each record is packed on its own, so alignment restarts at every record
/// boundary.
pub struct RecordWriter<W: Write> {
    writer: W,
    layout: Layout,
    buf: Vec<u8>,
    records: usize,
    bytes: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W, layout: Layout) -> Self {
        Self {
            writer,
            layout,
            buf: Vec::new(),
            records: 0,
            bytes: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Pack and write one record. Nothing is written when packing fails.
    pub fn write(&mut self, values: &[Value]) -> Result<()> {
        self.buf.clear();
        self.layout.pack_into(values, &mut self.buf)?;
        self.writer.write_all(&self.buf)?;
        self.records += 1;
        self.bytes += self.buf.len();
        trace!("wrote record {} ({} bytes)", self.records, self.buf.len());
        Ok(())
    }

    /// Write several records. Stops at the first record that fails; earlier
    /// records have already been written.
    pub fn write_batch(&mut self, rows: &[Vec<Value>]) -> Result<()> {
        for row in rows {
            self.write(row)?;
        }
        debug!("wrote batch of {} records with '{}'", rows.len(), self.layout);
        Ok(())
    }

    /// Records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.bytes
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads fixed-size records from `R` and unpacks them with one [`Layout`].
///
/// The layout must have a static size, so `s` and `c0` are not allowed.
pub struct RecordReader<R: Read> {
    reader: R,
    layout: Layout,
    buf: Vec<u8>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R, layout: Layout) -> Result<Self> {
        let size = layout.static_size()?;
        Ok(Self {
            reader,
            layout,
            buf: vec![0u8; size],
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Size in bytes of one record.
    pub fn record_size(&self) -> usize {
        self.buf.len()
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` at a clean end of stream, and
    /// [`RecordError::UnexpectedEof`] when the stream stops partway through
    /// a record. A zero-sized layout yields no records.
    pub fn read(&mut self) -> Result<Option<Vec<Value>>> {
        let expected = self.buf.len();
        if expected == 0 {
            return Ok(None);
        }

        let found = self.fill()?;
        if found == 0 {
            return Ok(None);
        }
        if found < expected {
            return Err(RecordError::UnexpectedEof { expected, found });
        }

        let out = self.layout.unpack(&self.buf)?;
        Ok(Some(out.into_values()))
    }

    /// Read up to `count` records, fewer if the stream ends first.
    pub fn read_batch(&mut self, count: usize) -> Result<Vec<Vec<Value>>> {
        let mut rows = Vec::with_capacity(count);
        while rows.len() < count {
            match self.read()? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> Result<usize> {
        let mut filled = 0;
        while filled < self.buf.len() {
            match self.reader.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use struct_codec::StructError;

    fn layout(fmt: &str) -> Layout {
        Layout::new(fmt).unwrap()
    }

    #[test]
    fn writer_counts_records() {
        let mut w = RecordWriter::new(Vec::new(), layout(">H B"));
        w.write(&[Value::from(1u16), Value::from(2u8)]).unwrap();
        w.write(&[Value::from(3u16), Value::from(4u8)]).unwrap();
        assert_eq!(w.records(), 2);
        assert_eq!(w.bytes_written(), 6);
        assert_eq!(w.into_inner(), [0, 1, 2, 0, 3, 4]);
    }

    #[test]
    fn failed_record_writes_nothing() {
        let mut w = RecordWriter::new(Vec::new(), layout("b b"));
        assert!(matches!(
            w.write(&[Value::Int(1)]),
            Err(RecordError::Struct(StructError::ArgumentError { .. }))
        ));
        assert_eq!(w.records(), 0);
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn reader_stops_cleanly() {
        let data = vec![0, 1, 2, 0, 3, 4];
        let mut r = RecordReader::new(Cursor::new(data), layout(">H B")).unwrap();
        assert_eq!(r.record_size(), 3);
        assert_eq!(
            r.read().unwrap(),
            Some(vec![Value::UInt(1), Value::UInt(2)])
        );
        assert_eq!(r.read_batch(5).unwrap().len(), 1);
        assert_eq!(r.read().unwrap(), None);
    }

    #[test]
    fn reader_reports_truncated_record() {
        let mut r = RecordReader::new(Cursor::new(vec![0, 1, 2, 0]), layout(">H B")).unwrap();
        assert!(r.read().unwrap().is_some());
        assert!(matches!(
            r.read(),
            Err(RecordError::UnexpectedEof {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn reader_needs_static_size() {
        assert!(matches!(
            RecordReader::new(Cursor::new(Vec::new()), layout("B s")),
            Err(RecordError::Struct(StructError::VariableLength { .. }))
        ));
    }

    #[test]
    fn zero_sized_layout_reads_nothing() {
        let mut r = RecordReader::new(Cursor::new(vec![1, 2]), layout("<>")).unwrap();
        assert_eq!(r.read().unwrap(), None);
    }
}
