//! Advisory checks on a record before it is rendered.
//!
//! Nothing here blocks rendering: the renderer copes with any record. The
//! report exists so the editor (or the `check` subcommand) can surface
//! problems the renderer would otherwise paper over.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::record::Record;
use crate::render::dates::parse_year_month;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum RecordIssue {
    /// Two entries in the same collection share an id.
    DuplicateId { collection: String, id: String },
    /// A date field is neither empty nor `YYYY-MM`.
    MalformedDate {
        collection: String,
        id: String,
        field: String,
        value: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<RecordIssue>,
}

/// Returns true for an empty value or a well-formed `YYYY-MM`.
pub fn is_year_month(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || parse_year_month(value).is_some()
}

pub fn validate_record(record: &Record) -> ValidationReport {
    let mut issues = Vec::new();

    check_unique(
        "experience",
        record.experience.iter().map(|e| e.id.as_str()),
        &mut issues,
    );
    check_unique(
        "education",
        record.education.iter().map(|e| e.id.as_str()),
        &mut issues,
    );
    check_unique(
        "languages",
        record.languages.iter().map(|l| l.id.as_str()),
        &mut issues,
    );
    check_unique(
        "customSections",
        record.custom_sections.iter().map(|s| s.id.as_str()),
        &mut issues,
    );

    for entry in &record.experience {
        for (field, value) in [("startDate", &entry.start_date), ("endDate", &entry.end_date)] {
            check_date("experience", &entry.id, field, value, &mut issues);
        }
    }
    for entry in &record.education {
        for (field, value) in [
            ("startDate", &entry.start_date),
            ("graduationDate", &entry.graduation_date),
        ] {
            check_date("education", &entry.id, field, value, &mut issues);
        }
    }

    ValidationReport {
        passed: issues.is_empty(),
        issues,
    }
}

fn check_unique<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<RecordIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(RecordIssue::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
    }
}

fn check_date(
    collection: &str,
    id: &str,
    field: &str,
    value: &str,
    issues: &mut Vec<RecordIssue>,
) {
    if !is_year_month(value) {
        issues.push(RecordIssue::MalformedDate {
            collection: collection.to_string(),
            id: id.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}
