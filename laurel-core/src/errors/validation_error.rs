//! Aggregate validation errors.
//!
//! Every pre-flight check collects all problems it can find into one
//! report before failing, so the operator sees every issue in a single
//! pass instead of a fix-one-rerun cycle.

use std::collections::BTreeMap;
use std::fmt;

use super::error_code::{self, LaurelErrorCode};

/// Ordered mapping of error code to human-readable message.
///
/// `BTreeMap` keeps report output deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one named error.
    pub fn insert(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(code.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the report contains an entry for `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Returns the message recorded under `code`, if any.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert a non-empty report into an error, or `Ok(())` otherwise.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { report: self })
        }
    }
}

/// Validation failure carrying the complete report for one input artifact.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub report: ValidationReport,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (code, message) in self.report.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{code}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl LaurelErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_ok() {
        assert!(ValidationReport::new().into_result().is_ok());
    }

    #[test]
    fn display_joins_code_message_lines() {
        let mut report = ValidationReport::new();
        report.insert("missing_name", "no name column");
        report.insert("data_empty", "no rows");
        let err = report.into_result().unwrap_err();
        let text = err.to_string();
        // BTreeMap ordering: data_empty sorts before missing_name
        assert_eq!(text, "data_empty: no rows\nmissing_name: no name column");
    }
}
