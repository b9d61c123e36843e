//! Array codec: self-describing record sequences inside a chunk
//!
//! An array region starts with two reserved fields (count, element-size)
//! that the writer back-patches on `end`. Element size is sniffed: the
//! first record's byte span becomes the provisional size, and any later
//! record with a different span degrades the whole array to dynamic
//! (element-size 0), permanently. Fixed-size arrays let the reader skip
//! record boundaries without trusting the decoder to consume every byte;
//! dynamic arrays rely on the decoder reading exactly its record's span,
//! an implicit contract between the encoder and decoder of a chunk kind.

use crate::cursor::Cursor;
use crate::error::{Result, SaveError};

/// Byte length of the reserved (count, element-size) array header.
const ARRAY_HEADER_LEN: u64 = 8;

/// Writer half of the array protocol.
///
/// Call [`ArrayWriter::begin`], write each record, call
/// [`ArrayWriter::advance`] once per record (including records that occupy
/// zero bytes), and finish with [`ArrayWriter::end`].
#[derive(Debug)]
pub struct ArrayWriter {
    header_pos: u64,
    mark: u64,
    count: u32,
    element_size: u32,
    sized: bool,
}

impl ArrayWriter {
    /// Reserve the array header at the current write position.
    pub fn begin(cur: &mut Cursor) -> Self {
        let header_pos = cur.write_tell();
        cur.write(0u32); // count, patched by end()
        cur.write(0u32); // element size, patched by end()
        ArrayWriter {
            header_pos,
            mark: cur.write_tell(),
            count: 0,
            element_size: 0,
            sized: false,
        }
    }

    /// Declare a record boundary at the current write position.
    ///
    /// The span since the previous boundary is compared against the first
    /// record's span; a mismatch degrades the array to dynamic size and the
    /// degrade is never undone, even if later spans match again.
    pub fn advance(&mut self, cur: &mut Cursor) {
        let span = cur.write_tell() - self.mark;
        if self.count == 0 {
            match u32::try_from(span) {
                Ok(size) => {
                    self.element_size = size;
                    self.sized = true;
                }
                Err(_) => self.sized = false,
            }
        } else if self.sized && span != u64::from(self.element_size) {
            self.sized = false;
        }
        self.count += 1;
        self.mark = cur.write_tell();
    }

    /// Back-patch the reserved header and restore the write position.
    ///
    /// Fails with [`SaveError::EmptyArrayInvariant`] when record bytes were
    /// written but no boundary was ever declared: an encoder bug, not a
    /// data error.
    pub fn end(self, cur: &mut Cursor) -> Result<()> {
        let end_pos = cur.write_tell();
        if self.count == 0 && end_pos != self.header_pos + ARRAY_HEADER_LEN {
            return Err(SaveError::EmptyArrayInvariant);
        }

        let element_size = if self.count > 0 && self.sized {
            self.element_size
        } else {
            0
        };

        cur.write_seek(self.header_pos)?;
        cur.write(self.count);
        cur.write(element_size);
        cur.write_seek(end_pos)?;
        Ok(())
    }
}

/// Reader half of the array protocol.
#[derive(Debug)]
pub struct ArrayReader {
    count: u32,
    element_size: u32,
    remaining: u32,
    element_start: u64,
}

impl ArrayReader {
    /// Read the array header and position the cursor at the first record.
    pub fn begin(cur: &mut Cursor) -> Result<Self> {
        let count = cur.read()?;
        let element_size = cur.read()?;
        Ok(ArrayReader {
            count,
            element_size,
            remaining: count,
            element_start: cur.read_tell(),
        })
    }

    /// Number of records in the array.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Element size in bytes; 0 means dynamic.
    pub fn element_size(&self) -> u32 {
        self.element_size
    }

    /// Whether every record occupies the same known span.
    pub fn is_fixed_size(&self) -> bool {
        self.element_size != 0
    }

    /// Finish the current record and report whether more remain.
    ///
    /// In fixed-size mode the cursor is advanced to exactly the record
    /// boundary, so a decoder that did not consume every byte of its record
    /// stays in sync. In dynamic mode the decoder must already have read
    /// exactly its record's span.
    pub fn next_element(&mut self, cur: &mut Cursor) -> Result<bool> {
        if self.remaining == 0 {
            return Ok(false);
        }
        if self.element_size != 0 {
            cur.read_seek(self.element_start + u64::from(self.element_size))?;
        }
        self.remaining -= 1;
        self.element_start = cur.read_tell();
        Ok(self.remaining > 0)
    }
}

/// Write `items` as one array, encoding each with `encode`.
pub fn write_array<T>(
    cur: &mut Cursor,
    items: &[T],
    mut encode: impl FnMut(&mut Cursor, &T) -> Result<()>,
) -> Result<()> {
    let mut writer = ArrayWriter::begin(cur);
    for item in items {
        encode(cur, item)?;
        writer.advance(cur);
    }
    writer.end(cur)
}

/// Read one array, decoding each record with `decode`.
pub fn read_array<T>(
    cur: &mut Cursor,
    mut decode: impl FnMut(&mut Cursor) -> Result<T>,
) -> Result<Vec<T>> {
    let mut reader = ArrayReader::begin(cur)?;
    // Cap preallocation; a hostile count runs out of buffer instead of memory.
    let mut items = Vec::with_capacity(reader.count().min(1024) as usize);
    for _ in 0..reader.count() {
        items.push(decode(cur)?);
        reader.next_element(cur)?;
    }
    Ok(items)
}
