//! Layered configuration for Laurel.

pub mod laurel_config;

pub use laurel_config::{ExportConfig, LaurelConfig, Overrides, RosterConfig};
