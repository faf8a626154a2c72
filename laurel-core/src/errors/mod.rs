//! Error handling for Laurel.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod generator_error;
pub mod render_error;
pub mod table_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::LaurelErrorCode;
pub use generator_error::GeneratorError;
pub use render_error::RenderError;
pub use table_error::TableError;
pub use validation_error::{ValidationError, ValidationReport};
