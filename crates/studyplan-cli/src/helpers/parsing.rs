//! Parsing helpers for subject lists and schedule formats.

use studyplan_core::Format;

use crate::errors::CliError;

/// Split a comma-separated subject list.
///
/// Entries are trimmed, blanks dropped, and duplicates removed keeping the
/// first occurrence.
pub fn parse_subjects(value: &str) -> anyhow::Result<Vec<String>> {
    let mut subjects: Vec<String> = Vec::new();
    for subject in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !subjects.iter().any(|existing| existing == subject) {
            subjects.push(subject.to_string());
        }
    }
    if subjects.is_empty() {
        return Err(
            CliError::invalid_input("Enter at least one subject (e.g. \"Math, History\")").into(),
        );
    }
    Ok(subjects)
}

/// Parse a format name or extension (json, xlsx, csv, ...).
pub fn parse_format(value: &str) -> anyhow::Result<Format> {
    Ok(value.parse::<Format>()?)
}
