//! laurel-core: Core types for the Laurel transcript generator
//!
//! This crate provides the foundation shared by the Laurel engine:
//! - Errors: one enum per subsystem, `thiserror` only, stable error codes
//! - Config: layered TOML configuration with env and caller overrides
//! - Tables: ordered in-memory view of a delimited input file
//! - Telemetry: tracing subscriber initialization for binaries and tests

pub mod config;
pub mod errors;
pub mod tables;
pub mod telemetry;

// Re-exports for convenience
pub use config::{ExportConfig, LaurelConfig, Overrides, RosterConfig};
pub use errors::{
    ConfigError, GeneratorError, LaurelErrorCode, RenderError, TableError,
    ValidationError, ValidationReport,
};
pub use tables::{Row, Table};
