//! Roster file validation.

use std::path::Path;

use laurel_core::config::LaurelConfig;
use laurel_core::errors::TableError;
use laurel_core::tables::Table;
use laurel_core::ValidationReport;

use super::format_rows;

/// Validate the roster file.
///
/// Fatal, short-circuiting checks: existence, `.csv` extension, parse
/// failure, zero data rows. After those, the remaining problems are
/// accumulated so the operator sees them all at once:
/// - `missing_name` - no name column
/// - `no_accolades` - no column carries the accolade prefix
/// - `invalid_<column>` - rows whose non-empty flag value is not
///   case-insensitively "yes" or "no"
pub fn validate_roster(path: &Path, config: &LaurelConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    let table = match Table::load(path) {
        Ok(table) => table,
        Err(e) => {
            insert_load_error(&mut report, "Data", e);
            return report;
        }
    };

    let name_column = config.roster.effective_name_column();
    let prefix = config.roster.effective_accolade_prefix();

    if !table.has_column(name_column) {
        report.insert(
            "missing_name",
            format!("Data file must contain a '{name_column}' column"),
        );
    }

    let accolade_columns: Vec<&String> = table
        .headers()
        .iter()
        .filter(|h| h.starts_with(prefix))
        .collect();

    if accolade_columns.is_empty() {
        report.insert(
            "no_accolades",
            format!("Data file must contain at least one accolade column (prefix: '{prefix}')"),
        );
    }

    for column in accolade_columns {
        let invalid_rows: Vec<usize> = table
            .iter()
            .filter(|row| {
                row.get(column)
                    .is_some_and(|v| !v.eq_ignore_ascii_case("yes") && !v.eq_ignore_ascii_case("no"))
            })
            .map(|row| row.index())
            .collect();
        if !invalid_rows.is_empty() {
            report.insert(
                format!("invalid_{column}"),
                format!(
                    "Invalid values in {column} at rows {}. Must be 'yes' or 'no'",
                    format_rows(&invalid_rows)
                ),
            );
        }
    }

    report
}

/// Map a table loading failure onto the report's named codes.
/// Shared with the writeups validator; `artifact` is "Data" or "Writeups".
pub(super) fn insert_load_error(report: &mut ValidationReport, artifact: &str, error: TableError) {
    match error {
        TableError::FileNotFound { path } => report.insert(
            "file_existence",
            format!("{artifact} file does not exist: {path}"),
        ),
        TableError::Extension { path } => report.insert(
            "file_extension",
            format!("{artifact} file must be a CSV file, got: {path}"),
        ),
        TableError::Empty { .. } => {
            report.insert("data_empty", format!("{artifact} file is empty"))
        }
        TableError::Parse { message, .. } => report.insert(
            "file_format",
            format!("Invalid CSV file format: {message}"),
        ),
        other => report.insert(
            "unexpected",
            format!(
                "Unexpected error validating {} file: {other}",
                artifact.to_lowercase()
            ),
        ),
    }
}
