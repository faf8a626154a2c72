//! Rendering errors for writeup substitution and document templates.

use super::error_code::{self, LaurelErrorCode};

/// Errors that can occur while rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A writeup references a variable the person's context does not
    /// provide. This signals a data/template mismatch the operator must
    /// fix, so it is never silently skipped.
    #[error("Writeup for '{accolade}' references missing variable '{variable}'")]
    MissingVariable { accolade: String, variable: String },

    #[error("Document template error: {0}")]
    Template(String),
}

impl LaurelErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        error_code::RENDER_ERROR
    }
}
