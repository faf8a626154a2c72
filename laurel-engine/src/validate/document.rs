//! Document template validation.

use std::path::Path;

use minijinja::Environment;

use laurel_core::ValidationReport;

use super::REQUIRED_TEMPLATE_VARIABLE;

/// Validate a document template file.
///
/// The template must exist, carry an extension (it names the per-person
/// output files), parse under the document engine, and declare a
/// `transcript` insertion point (case-insensitive). Engine failures are
/// rewrapped under `template_error` rather than propagated raw.
pub fn validate_document_template(path: &Path) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !path.exists() {
        report.insert(
            "file_existence",
            format!("Template file does not exist: {}", path.display()),
        );
        return report;
    }

    if path.extension().and_then(|e| e.to_str()).is_none() {
        report.insert(
            "file_extension",
            format!("Template file must have an extension: {}", path.display()),
        );
    }

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            report.insert(
                "template_error",
                format!("Error processing template file: {e}"),
            );
            return report;
        }
    };

    let env = Environment::new();
    match env.template_from_str(&source) {
        Ok(template) => {
            let declares_transcript = template
                .undeclared_variables(true)
                .iter()
                .any(|v| v.eq_ignore_ascii_case(REQUIRED_TEMPLATE_VARIABLE));
            if !declares_transcript {
                report.insert("missing_transcript", "Template missing transcript insertion");
            }
        }
        Err(e) => {
            report.insert(
                "template_error",
                format!("Error processing template file: {e}"),
            );
        }
    }

    report
}
