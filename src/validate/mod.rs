// src/validate/mod.rs

mod rules;

pub use rules::{email_shape_ok, phone_shape_ok};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::parse::CandidateRecord;

/// The two account kinds an upload may create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Counselor,
}

impl Role {
    /// Strict parse: exact tokens only. `"Student"` or `"teacher"` are not
    /// roles, they are validation errors; unrecognized tokens are flagged,
    /// never defaulted.
    pub fn parse(token: &str) -> Option<Role> {
        match token {
            "student" => Some(Role::Student),
            "counselor" => Some(Role::Counselor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Counselor => "counselor",
        }
    }
}

/// One rule failure on one field of one row.
///
/// Errors are never merged or deduplicated; a row holds as many as its
/// fields earned, in rule-evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: u64,
    pub field: String,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(row: u64, field: &str, value: &str, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

/// Applies the field rules to each record in a fixed order, collecting every
/// failure instead of stopping at the first.
///
/// The only cross-record state is the set of uids seen so far, backing the
/// duplicate check. The set lives inside the validator value, so each import
/// run, and each concurrent upload, gets its own.
#[derive(Debug, Default)]
pub struct RecordValidator {
    seen_uids: HashSet<String>,
}

impl RecordValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every rule against `record`, returning errors in rule order.
    ///
    /// A row with an empty `uid` is reported as missing and never enters the
    /// seen set, so it cannot also be a duplicate. The first occurrence of a
    /// uid is never flagged; every later occurrence is.
    pub fn validate(&mut self, record: &CandidateRecord) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let row = record.row;

        if record.uid.is_empty() {
            errors.push(ValidationError::new(row, "uid", &record.uid, "required"));
        } else if !self.seen_uids.insert(record.uid.clone()) {
            errors.push(ValidationError::new(row, "uid", &record.uid, "duplicate"));
        }

        if record.name.is_empty() {
            errors.push(ValidationError::new(row, "name", &record.name, "required"));
        }

        if record.email.is_empty() {
            errors.push(ValidationError::new(row, "email", &record.email, "required"));
        } else if !rules::email_shape_ok(&record.email) {
            errors.push(ValidationError::new(
                row,
                "email",
                &record.email_as_written,
                format!("invalid email: \"{}\"", record.email_as_written),
            ));
        }

        // phone is optional; only a non-empty value has a shape to check
        if !record.phone.is_empty() && !rules::phone_shape_ok(&record.phone) {
            errors.push(ValidationError::new(
                row,
                "phone",
                &record.phone,
                "invalid phone number",
            ));
        }

        if Role::parse(&record.role).is_none() {
            errors.push(ValidationError::new(
                row,
                "role",
                &record.role,
                "must be 'student' or 'counselor'",
            ));
        }

        errors
    }
}
