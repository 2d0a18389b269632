use super::{Columns, RawRow};

/// A structurally complete row, normalized and ready for rule evaluation.
///
/// Every value is whitespace-trimmed by the reader. `email` is additionally
/// lowercased here, at parse time, so the format and uniqueness checks
/// operate on one canonical form; `email_as_written` keeps the trimmed
/// original for quoting back to the uploader.
///
/// A record belongs to the pipeline run that produced it and is discarded
/// once its row has been folded into the report.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    /// The trimmed, un-lowercased email, exactly as the uploader wrote it.
    pub email_as_written: String,
    /// 1-based data-row index, header excluded.
    pub row: u64,
}

impl CandidateRecord {
    pub fn from_row(row: &RawRow, columns: &Columns) -> Self {
        let email_as_written = row.field(columns.email()).to_string();
        Self {
            uid: row.field(columns.uid()).to_string(),
            name: row.field(columns.name()).to_string(),
            email: email_as_written.to_lowercase(),
            phone: row.field(columns.phone()).to_string(),
            role: row.field(columns.role()).to_string(),
            email_as_written,
            row: row.index(),
        }
    }
}
