// src/parse/mod.rs

mod header;
mod record;

pub use header::{Columns, REQUIRED_COLUMNS};
pub use record::CandidateRecord;

use csv_async::{AsyncReader, AsyncReaderBuilder, StringRecord, Trim};
use tokio::io::AsyncRead;
use tracing::trace;

use crate::error::ImportError;

/// One data line of the upload: its parsed fields plus the 1-based row
/// index (header excluded). Immutable after creation.
#[derive(Debug)]
pub struct RawRow {
    index: u64,
    fields: StringRecord,
}

impl RawRow {
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Field value at `position`. Positions come from [`Columns`]; the
    /// reader runs in strict mode, so a yielded row always has a value at
    /// every header position.
    pub fn field(&self, position: usize) -> &str {
        self.fields.get(position).unwrap_or("")
    }
}

/// Streaming reader over an upload: consumes the header row once, then
/// yields one [`RawRow`] per data line.
///
/// The sequence is lazy, ordered and non-restartable: after `Ok(None)` or an
/// error the reader is exhausted. Only the current line is resident, so
/// memory stays constant regardless of file size, and the underlying stream
/// is polled only when the caller asks for the next row. Dropping the reader
/// releases the source.
pub struct RowReader<R> {
    reader: AsyncReader<R>,
    columns: Columns,
    next_index: u64,
}

impl<R> RowReader<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Read the header row and resolve the required columns.
    ///
    /// Fails before yielding any row if the stream is empty, the first line
    /// is blank, or the header lacks a required column name.
    pub async fn new(source: R) -> Result<Self, ImportError> {
        let mut reader = AsyncReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .create_reader(source);

        let header = reader.headers().await?.clone();
        if header.iter().all(str::is_empty) {
            return Err(ImportError::MissingHeader);
        }
        let columns = Columns::from_header(&header)?;

        Ok(Self {
            reader,
            columns,
            next_index: 1,
        })
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Yield the next data line, or `None` at a clean end of stream.
    ///
    /// A ragged line, one whose field count differs from the header's, is a
    /// fatal structural error rather than a row-level one: the reader runs
    /// strict, never truncating or padding, and the whole run aborts.
    pub async fn next_row(&mut self) -> Result<Option<RawRow>, ImportError> {
        let mut fields = StringRecord::new();
        if !self.reader.read_record(&mut fields).await? {
            return Ok(None);
        }
        let index = self.next_index;
        self.next_index += 1;
        trace!(row = index, "yielding row");
        Ok(Some(RawRow { index, fields }))
    }
}
