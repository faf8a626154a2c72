//! Output directory validation.

use std::path::Path;

use laurel_core::ValidationReport;

/// Validate an output directory path.
///
/// An existing path must be a writable directory. An absent path is
/// acceptable (exporters create it) as long as its parent exists and is
/// writable.
pub fn validate_output_directory(path: &Path) -> ValidationReport {
    let mut report = ValidationReport::new();

    if path.exists() {
        if !path.is_dir() {
            report.insert(
                "not_directory",
                format!("Output path exists but is not a directory: {}", path.display()),
            );
        } else if !is_writable(path) {
            report.insert(
                "not_writeable",
                format!("Output directory is not writeable: {}", path.display()),
            );
        }
    } else {
        // A relative single-component path has an empty parent; that
        // means the current directory.
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.exists() {
            report.insert(
                "parent_missing",
                format!("Parent directory does not exist: {}", parent.display()),
            );
        } else if !is_writable(parent) {
            report.insert(
                "parent_not_writeable",
                format!("Parent directory is not writeable: {}", parent.display()),
            );
        }
    }

    report
}

/// Permission-bit check only - the validators are read-only by
/// contract, so no probe file is written.
fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
