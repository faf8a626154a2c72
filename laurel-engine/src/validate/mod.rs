//! Pre-flight validation of the input artifacts.
//!
//! Four independent, read-only checks. Each collects every problem it
//! can find into one [`ValidationReport`](laurel_core::ValidationReport)
//! and fails with the whole report at once; none continues past a
//! missing or malformed file.

mod document;
mod output_dir;
mod roster;
mod writeups;

pub use document::validate_document_template;
pub use output_dir::validate_output_directory;
pub use roster::validate_roster;
pub use writeups::validate_writeups;

/// Required columns in the writeups table.
pub const REQUIRED_WRITEUP_COLUMNS: [&str; 2] = ["accolade", "writeup"];
/// Insertion point the document template must declare.
pub const REQUIRED_TEMPLATE_VARIABLE: &str = "transcript";

/// Format zero-based row indices the way reports list them: `[0, 2]`.
pub(crate) fn format_rows(rows: &[usize]) -> String {
    let items: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
    format!("[{}]", items.join(", "))
}
