//! Output path helpers shared by both exporters.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use laurel_core::errors::{ConfigError, GeneratorError};

use crate::validate::validate_output_directory;

/// One timestamp per export run; every artifact of the run shares it.
///
/// Config loading rejects malformed patterns, but a hand-built config
/// can still carry one; chrono's `DelayedFormat` only surfaces that at
/// render time, so the failure is caught here and mapped instead of
/// panicking mid-export.
pub fn run_timestamp(format: &str) -> Result<String, GeneratorError> {
    let mut out = String::new();
    write!(out, "{}", chrono::Local::now().format(format)).map_err(|_| {
        GeneratorError::Config(ConfigError::ValidationFailed {
            field: "export.timestamp_format".to_string(),
            message: format!("invalid strftime pattern: {format}"),
        })
    })?;
    Ok(out)
}

/// Derive a filesystem-safe filename fragment from a person's name:
/// keep alphanumerics, hyphens, and underscores, drop everything else.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and materialize the output directory.
///
/// An explicit directory is validated up front (fatal on failure) and
/// created if absent; no explicit directory means `fallback`.
pub(super) fn resolve_output_dir(
    explicit: Option<&Path>,
    fallback: PathBuf,
) -> Result<PathBuf, GeneratorError> {
    let dir = match explicit {
        Some(dir) => {
            validate_output_directory(dir).into_result()?;
            dir.to_path_buf()
        }
        None => fallback,
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
