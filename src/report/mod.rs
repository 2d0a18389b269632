// src/report/mod.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parse::CandidateRecord;
use crate::validate::{Role, ValidationError};

/// The single artifact that survives an import run: aggregate counts plus
/// the per-row error breakdown the uploader sees.
///
/// Field names serialize in camelCase; the consuming web application hands
/// the report to its frontend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub total_records: u64,
    pub valid_records: u64,
    pub invalid_records: u64,
    pub students_count: u64,
    pub counselors_count: u64,
    /// Row number to that row's errors: ascending by row, rule order within
    /// a row. Only rows with at least one error appear.
    pub errors_by_row: BTreeMap<u64, Vec<ValidationError>>,
}

impl ValidationReport {
    /// True when every row passed every rule.
    pub fn is_clean(&self) -> bool {
        self.invalid_records == 0
    }

    /// Total number of field errors across all rows.
    pub fn error_count(&self) -> usize {
        self.errors_by_row.values().map(Vec::len).sum()
    }
}

/// Accumulates both projections of the validated-record stream in one
/// forward pass: the row-to-errors view and the aggregate counts.
///
/// Performs no validation of its own; a row is valid exactly when the error
/// list handed in with it is empty. Role counts are taken over error-free
/// rows only, so `students_count + counselors_count == valid_records` holds
/// by construction.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    total_records: u64,
    valid_records: u64,
    invalid_records: u64,
    students_count: u64,
    counselors_count: u64,
    errors_by_row: BTreeMap<u64, Vec<ValidationError>>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the report, preserving the error list's order.
    pub fn observe(&mut self, record: &CandidateRecord, errors: Vec<ValidationError>) {
        self.total_records += 1;
        if errors.is_empty() {
            self.valid_records += 1;
            match Role::parse(&record.role) {
                Some(Role::Student) => self.students_count += 1,
                Some(Role::Counselor) => self.counselors_count += 1,
                // unreachable for an error-free row: the role rule flags
                // every other token
                None => {}
            }
        } else {
            self.invalid_records += 1;
            self.errors_by_row.insert(record.row, errors);
        }
    }

    /// Seal the run. Consumes the builder: a report is produced exactly
    /// once per completed pass.
    pub fn finish(self) -> ValidationReport {
        ValidationReport {
            total_records: self.total_records,
            valid_records: self.valid_records,
            invalid_records: self.invalid_records,
            students_count: self.students_count,
            counselors_count: self.counselors_count,
            errors_by_row: self.errors_by_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn record(uid: &str, role: &str, row: u64) -> CandidateRecord {
        CandidateRecord {
            uid: uid.to_string(),
            name: "Someone".to_string(),
            email: format!("{}@u.edu", uid.to_lowercase()),
            phone: String::new(),
            role: role.to_string(),
            email_as_written: format!("{}@u.edu", uid.to_lowercase()),
            row,
        }
    }

    fn error(row: u64, field: &str) -> ValidationError {
        ValidationError::new(row, field, "", "required")
    }

    #[test]
    fn counts_partition_and_role_breakdown_hold() {
        let mut builder = ReportBuilder::new();
        builder.observe(&record("U1", "student", 1), vec![]);
        builder.observe(&record("U2", "counselor", 2), vec![]);
        builder.observe(&record("U3", "teacher", 3), vec![error(3, "role")]);
        builder.observe(&record("U4", "student", 4), vec![]);

        let report = builder.finish();
        assert_eq!(report.total_records, 4);
        assert_eq!(report.valid_records, 3);
        assert_eq!(report.invalid_records, 1);
        assert_eq!(report.students_count, 2);
        assert_eq!(report.counselors_count, 1);
        assert_eq!(
            report.total_records,
            report.valid_records + report.invalid_records
        );
        assert_eq!(
            report.students_count + report.counselors_count,
            report.valid_records
        );
    }

    #[test]
    fn only_rows_with_errors_appear_in_ascending_order() {
        let mut builder = ReportBuilder::new();
        builder.observe(&record("U1", "student", 1), vec![]);
        builder.observe(&record("U2", "x", 2), vec![error(2, "role")]);
        builder.observe(&record("U3", "student", 3), vec![]);
        builder.observe(&record("", "y", 4), vec![error(4, "uid"), error(4, "role")]);

        let report = builder.finish();
        let rows: Vec<u64> = report.errors_by_row.keys().copied().collect();
        assert_eq!(rows, [2, 4]);
        assert_eq!(report.errors_by_row[&4].len(), 2);
        assert_eq!(report.error_count(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn per_row_error_order_is_preserved_verbatim() {
        let mut builder = ReportBuilder::new();
        let errors = vec![error(1, "uid"), error(1, "email"), error(1, "role")];
        builder.observe(&record("", "z", 1), errors);

        let report = builder.finish();
        let fields: Vec<&str> = report.errors_by_row[&1]
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, ["uid", "email", "role"]);
    }

    #[test]
    fn report_serializes_with_camel_case_keys() -> Result<()> {
        let mut builder = ReportBuilder::new();
        builder.observe(&record("U1", "student", 1), vec![]);
        let json = serde_json::to_value(builder.finish())?;

        assert_eq!(json["totalRecords"], 1);
        assert_eq!(json["validRecords"], 1);
        assert_eq!(json["invalidRecords"], 0);
        assert_eq!(json["studentsCount"], 1);
        assert_eq!(json["counselorsCount"], 0);
        assert!(json["errorsByRow"].as_object().is_some_and(|m| m.is_empty()));
        Ok(())
    }
}
