//! Streaming bulk-onboarding pipeline for institution roster uploads.
//!
//! An institution hands the surrounding application a CSV describing the
//! students and counselors to create. This crate turns that untrusted byte
//! stream into a [`ValidationReport`]: per-row field errors grouped by row,
//! plus the aggregate counts the caller uses to decide what to import and
//! what to bounce.
//!
//! ```text
//! bytes -> parse -> validate -> aggregate + summarize -> ValidationReport
//! ```
//!
//! The pass is streaming and single-shot. Rows are read one at a time, so
//! arbitrarily large uploads run in constant memory; a structural fault
//! (missing header column, ragged line, transport failure) aborts the run
//! with an [`ImportError`] instead of a report, while field-rule failures
//! accumulate without ever stopping the pass.
//!
//! ```rust,ignore
//! let report = roster_ingest::import_path("roster.csv").await?;
//! if report.is_clean() {
//!     println!("all {} rows importable", report.valid_records);
//! } else {
//!     for (row, errors) in &report.errors_by_row {
//!         eprintln!("row {}: {} problem(s)", row, errors.len());
//!     }
//! }
//! ```
//!
//! File selection, upload transport and report rendering belong to the
//! caller; this crate only owns the contract between raw bytes and report.

pub mod error;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod validate;

pub use error::ImportError;
pub use parse::{CandidateRecord, Columns, RawRow, RowReader, REQUIRED_COLUMNS};
pub use pipeline::{import, import_path};
pub use report::{ReportBuilder, ValidationReport};
pub use validate::{RecordValidator, Role, ValidationError};
