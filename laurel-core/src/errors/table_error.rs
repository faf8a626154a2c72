//! Tabular input errors.

use super::error_code::{self, LaurelErrorCode};

/// Errors that can occur while loading a delimited input file.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("File does not exist: {path}")]
    FileNotFound { path: String },

    #[error("Expected a CSV file, got: {path}")]
    Extension { path: String },

    #[error("File contains no data rows: {path}")]
    Empty { path: String },

    #[error("Invalid CSV in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Required column '{column}' is missing from {path}")]
    MissingColumn { path: String, column: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaurelErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        error_code::TABLE_ERROR
    }
}
