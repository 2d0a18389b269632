// src/pipeline.rs

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, BufReader};
use tracing::{info, instrument};

use crate::error::ImportError;
use crate::parse::{CandidateRecord, RowReader};
use crate::report::{ReportBuilder, ValidationReport};
use crate::validate::RecordValidator;

/// Run the full onboarding pipeline over `source`: consume the header, then
/// stream every data row through the validator and fold it into the report.
///
/// One pass, constant memory. A row is pulled from the stream only after the
/// previous one has been folded in, so a slow caller naturally holds back
/// the reads; there is no internal buffering to grow. Dropping the returned
/// future cancels the run: the source is released and no report, partial or
/// otherwise, is observed.
///
/// Structural faults (missing header column, ragged line, transport failure)
/// abort with an [`ImportError`]. Field-rule failures never abort; they
/// accumulate in the report so the caller can import the valid rows and
/// bounce the rest.
#[instrument(level = "info", skip(source))]
pub async fn import<R>(source: R) -> Result<ValidationReport, ImportError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut rows = RowReader::new(source).await?;
    let mut validator = RecordValidator::new();
    let mut builder = ReportBuilder::new();

    while let Some(row) = rows.next_row().await? {
        let record = CandidateRecord::from_row(&row, rows.columns());
        let errors = validator.validate(&record);
        builder.observe(&record, errors);
    }

    let report = builder.finish();
    info!(
        total = report.total_records,
        valid = report.valid_records,
        invalid = report.invalid_records,
        "import complete"
    );
    Ok(report)
}

/// Open `path` and run [`import`] over its contents.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub async fn import_path(path: impl AsRef<Path>) -> Result<ValidationReport, ImportError> {
    let file = File::open(path.as_ref()).await?;
    import(BufReader::new(file)).await
}
