use thiserror::Error;

/// Fatal, structural failures that abort an import run before any report
/// exists.
///
/// Row-level problems never appear here; they accumulate as
/// [`ValidationError`](crate::validate::ValidationError)s inside the report
/// and the run carries on. An `ImportError` means the file itself is broken
/// and the uploader has to fix its structure and resubmit.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The stream ended (or started blank) before a header line was read.
    #[error("input has no header row")]
    MissingHeader,

    /// A header line exists but lacks one of the required column names.
    #[error("header missing required column: {0}")]
    MissingColumn(String),

    /// The bytes could not be tokenized as delimited text: bad quoting,
    /// non-UTF-8 content, or a line whose field count does not match the
    /// header.
    #[error("malformed CSV stream: {0}")]
    Malformed(#[from] csv_async::Error),

    /// The underlying transport failed mid-read.
    #[error("stream I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
