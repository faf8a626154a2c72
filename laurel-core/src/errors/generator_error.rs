//! Generator errors.

use super::error_code::{self, LaurelErrorCode};
use super::{ConfigError, RenderError, TableError, ValidationError};

/// Errors that can occur while constructing a generator or running an
/// export. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Validation failed:\n{0}")]
    Validation(#[from] ValidationError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LaurelErrorCode for GeneratorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
