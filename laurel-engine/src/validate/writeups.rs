//! Writeups file validation.

use std::collections::HashSet;
use std::path::Path;

use laurel_core::tables::Table;
use laurel_core::ValidationReport;

use super::roster::insert_load_error;
use super::{format_rows, REQUIRED_WRITEUP_COLUMNS};

/// Validate the writeups file.
///
/// Fatal, short-circuiting checks mirror the roster validator. The
/// accumulated checks:
/// - `missing_columns` - required `accolade`/`writeup` columns absent
/// - `empty_writeups` / `empty_accolades` - blank cells, by row
/// - `duplicate_accolades` - rows whose accolade identifier repeats
pub fn validate_writeups(path: &Path) -> ValidationReport {
    let mut report = ValidationReport::new();

    let table = match Table::load(path) {
        Ok(table) => table,
        Err(e) => {
            insert_load_error(&mut report, "Writeups", e);
            return report;
        }
    };

    let missing: Vec<&str> = REQUIRED_WRITEUP_COLUMNS
        .iter()
        .copied()
        .filter(|c| !table.has_column(c))
        .collect();
    if !missing.is_empty() {
        report.insert(
            "missing_columns",
            format!("Writeups file missing required columns: {}", missing.join(", ")),
        );
    }

    if table.has_column("writeup") {
        let empty_rows: Vec<usize> = table
            .iter()
            .filter(|row| row.get("writeup").is_none())
            .map(|row| row.index())
            .collect();
        if !empty_rows.is_empty() {
            report.insert(
                "empty_writeups",
                format!(
                    "Empty writeup templates found in rows: {}",
                    format_rows(&empty_rows)
                ),
            );
        }
    }

    if table.has_column("accolade") {
        let empty_rows: Vec<usize> = table
            .iter()
            .filter(|row| row.get("accolade").is_none())
            .map(|row| row.index())
            .collect();
        if !empty_rows.is_empty() {
            report.insert(
                "empty_accolades",
                format!(
                    "Empty accolade names found in rows: {}",
                    format_rows(&empty_rows)
                ),
            );
        }

        // A repeated identifier would make one writeup silently shadow
        // another, so every repeat after the first is reported.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut duplicate_rows = Vec::new();
        for row in table.iter() {
            if let Some(accolade) = row.get("accolade") {
                if !seen.insert(accolade) {
                    duplicate_rows.push(row.index());
                }
            }
        }
        if !duplicate_rows.is_empty() {
            report.insert(
                "duplicate_accolades",
                format!(
                    "Duplicate accolade names found in rows: {}",
                    format_rows(&duplicate_rows)
                ),
            );
        }
    }

    report
}
