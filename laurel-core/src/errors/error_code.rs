//! Stable error codes for every Laurel error.
//!
//! Codes are part of the public contract: callers (and the GUI shell that
//! sits in front of the library) match on these instead of error messages.

/// Maps an error to a stable, machine-readable code.
pub trait LaurelErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const TABLE_ERROR: &str = "TABLE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
