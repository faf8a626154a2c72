//! Tabular export - one CSV row per person, single `transcript` column.

use std::path::{Path, PathBuf};

use laurel_core::config::LaurelConfig;
use laurel_core::errors::GeneratorError;
use laurel_core::tables::Table;

use crate::transcript::TranscriptBuilder;

use super::paths::{resolve_output_dir, run_timestamp};

/// Export every person's transcript to `transcripts_<timestamp>.csv`.
///
/// A per-person render failure is degraded to an inline `Error: ...`
/// value so one bad row never aborts the batch. Returns the path of the
/// written file.
pub fn export_table(
    roster: &Table,
    builder: &TranscriptBuilder<'_>,
    config: &LaurelConfig,
    output_dir: Option<&Path>,
) -> Result<PathBuf, GeneratorError> {
    let explicit = output_dir.or(config.export.output_dir.as_deref());
    let dir = resolve_output_dir(explicit, std::env::current_dir()?)?;

    let timestamp = run_timestamp(config.export.effective_timestamp_format())?;
    let output_path = dir.join(format!("transcripts_{timestamp}.csv"));

    let mut writer = csv::Writer::from_path(&output_path)
        .map_err(|e| GeneratorError::Io(std::io::Error::other(e)))?;
    writer
        .write_record(["transcript"])
        .map_err(|e| GeneratorError::Io(std::io::Error::other(e)))?;

    for row in roster.iter() {
        let transcript = match builder.build(row) {
            Ok(transcript) => transcript,
            Err(e) => {
                tracing::error!(row = row.index(), error = %e, "Error generating transcript");
                format!("Error: {e}")
            }
        };
        writer
            .write_record([transcript.as_str()])
            .map_err(|e| GeneratorError::Io(std::io::Error::other(e)))?;
    }

    writer
        .flush()
        .map_err(GeneratorError::Io)?;

    tracing::info!(path = %output_path.display(), rows = roster.row_count(), "Exported transcripts CSV");
    Ok(output_path)
}
