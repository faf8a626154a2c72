//! Document export - one rendered document per person.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use minijinja::Environment;

use laurel_core::config::LaurelConfig;
use laurel_core::errors::{GeneratorError, RenderError};
use laurel_core::tables::{Row, Table};

use crate::transcript::TranscriptBuilder;
use crate::validate::validate_document_template;

use super::paths::{resolve_output_dir, run_timestamp, sanitize_name};

/// Render one document per person from a `{{ placeholder }}` template.
///
/// The template and output directory are validated up front (fatal).
/// Per person, any render or save failure is logged and that person is
/// skipped; the batch continues. Returns the output directory.
pub fn export_documents(
    roster: &Table,
    builder: &TranscriptBuilder<'_>,
    config: &LaurelConfig,
    template_path: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf, GeneratorError> {
    validate_document_template(template_path).into_result()?;

    let timestamp = run_timestamp(config.export.effective_timestamp_format())?;
    let explicit = output_dir.or(config.export.output_dir.as_deref());
    let fallback = std::env::current_dir()?.join(format!("transcripts_{timestamp}"));
    let dir = resolve_output_dir(explicit, fallback)?;

    let source = std::fs::read_to_string(template_path)?;
    // Validation guarantees an extension exists.
    let extension = template_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt");

    let name_column = config.roster.effective_name_column();

    for row in roster.iter() {
        // An absent name stringifies like any other missing variable.
        let name = row.get(name_column).unwrap_or("None").to_string();
        match render_person(builder, row, &source) {
            Ok(rendered) => {
                let filename =
                    format!("transcript_{}_{timestamp}.{extension}", sanitize_name(&name));
                let output_path = dir.join(filename);
                if let Err(e) = std::fs::write(&output_path, rendered) {
                    tracing::error!(person = %name, error = %e, "Error saving document");
                    continue;
                }
                tracing::info!(person = %name, path = %output_path.display(), "Saved document");
            }
            Err(e) => {
                tracing::error!(person = %name, error = %e, "Error processing document");
                continue;
            }
        }
    }

    Ok(dir)
}

/// Render the document for one person with a fresh engine instance.
///
/// Rendering mutates engine state, so instances are never reused across
/// people; each render gets its own environment scoped to this call.
fn render_person(
    builder: &TranscriptBuilder<'_>,
    row: Row<'_>,
    source: &str,
) -> Result<String, RenderError> {
    let transcript = builder.build(row)?;

    let mut context: BTreeMap<String, String> = builder
        .variables(row)
        .into_iter()
        .map(|(k, v)| (normalize_key(&k), v))
        .collect();
    context.insert("transcript".to_string(), transcript);

    let env = Environment::new();
    let template = env
        .template_from_str(source)
        .map_err(|e| RenderError::Template(e.to_string()))?;
    template
        .render(&context)
        .map_err(|e| RenderError::Template(e.to_string()))
}

/// Context keys follow the template's placeholder naming convention:
/// lowercase, spaces replaced with underscores.
fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}
