//! Iterating over records packed back to back in a byte slice.

use struct_codec::{Layout, StructError, Value};

/// Unpacks consecutive records from a byte slice.
///
/// Each record starts where the previous one ended, so layouts with `s` or
/// `c0` work. The iterator ends when the input is exhausted and stops for
/// good after the first error.
///
/// ```
/// use struct_codec::{Layout, Value};
/// use struct_io::RecordIter;
///
/// let layout = Layout::new("B c0").unwrap();
/// let data = [2, b'h', b'i', 1, b'!'];
/// let names: Vec<_> = RecordIter::new(&layout, &data)
///     .map(|r| r.unwrap().pop().unwrap())
///     .collect();
/// assert_eq!(names, [Value::from("hi"), Value::from("!")]);
/// ```
pub struct RecordIter<'a> {
    layout: &'a Layout,
    data: &'a [u8],
    /// 1-indexed position of the next record.
    next: usize,
    failed: bool,
}

impl<'a> RecordIter<'a> {
    pub fn new(layout: &'a Layout, data: &'a [u8]) -> Self {
        Self {
            layout,
            data,
            next: 1,
            failed: false,
        }
    }

    /// Byte offset where the next record starts.
    pub fn offset(&self) -> usize {
        self.next - 1
    }

    /// Unread tail of the input.
    pub fn remainder(&self) -> &'a [u8] {
        &self.data[self.offset().min(self.data.len())..]
    }
}

impl Iterator for RecordIter<'_> {
    type Item = Result<Vec<Value>, StructError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next > self.data.len() {
            return None;
        }
        match self.layout.unpack_at(self.data, self.next) {
            Ok(out) if out.next == self.next => {
                // A record that consumes nothing would repeat forever.
                self.failed = true;
                None
            }
            Ok(out) => {
                self.next = out.next;
                Some(Ok(out.values))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
