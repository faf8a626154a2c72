//! Top-level Laurel configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default column holding each person's display name.
pub const DEFAULT_NAME_COLUMN: &str = "name";
/// Default prefix marking roster columns as accolade flags.
pub const DEFAULT_ACCOLADE_PREFIX: &str = "accolade_";
/// Default strftime pattern for run timestamps.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_overrides`)
/// 2. Environment variables (`LAUREL_*`)
/// 3. Project config (`laurel.toml` in project root)
/// 4. User config (`~/.laurel/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LaurelConfig {
    pub roster: RosterConfig,
    pub export: ExportConfig,
}

/// Roster table settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RosterConfig {
    /// Column holding each person's display name.
    pub name_column: Option<String>,
    /// Prefix marking a column as an accolade flag.
    pub accolade_prefix: Option<String>,
}

impl RosterConfig {
    pub fn effective_name_column(&self) -> &str {
        self.name_column.as_deref().unwrap_or(DEFAULT_NAME_COLUMN)
    }

    pub fn effective_accolade_prefix(&self) -> &str {
        self.accolade_prefix
            .as_deref()
            .unwrap_or(DEFAULT_ACCOLADE_PREFIX)
    }
}

/// Export settings shared by both exporters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory. `None` resolves to the current working directory.
    pub output_dir: Option<PathBuf>,
    /// strftime pattern for run timestamps embedded in output filenames.
    pub timestamp_format: Option<String>,
}

impl ExportConfig {
    pub fn effective_timestamp_format(&self) -> &str {
        self.timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
    }
}

/// Caller-supplied override arguments (highest priority layer).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name_column: Option<String>,
    pub accolade_prefix: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub timestamp_format: Option<String>,
}

impl LaurelConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Caller overrides
    /// 2. Environment variables (`LAUREL_*`)
    /// 3. Project config (`laurel.toml` in `root`)
    /// 4. User config (`~/.laurel/config.toml`)
    /// 5. Compiled defaults
    pub fn load(root: &Path, overrides: Option<&Overrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("laurel.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): caller overrides
        if let Some(ov) = overrides {
            Self::apply_overrides(&mut config, ov);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LaurelConfig) -> Result<(), ConfigError> {
        if let Some(ref name_column) = config.roster.name_column {
            if name_column.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "roster.name_column".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref prefix) = config.roster.accolade_prefix {
            if prefix.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "roster.accolade_prefix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref format) = config.export.timestamp_format {
            if format.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "export.timestamp_format".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            // Chrono's formatter rejects bad specifiers only when the
            // pattern is rendered, so parse it up front instead of
            // letting an export run trip over it.
            let bad_item = chrono::format::StrftimeItems::new(format)
                .any(|item| matches!(item, chrono::format::Item::Error));
            if bad_item {
                return Err(ConfigError::ValidationFailed {
                    field: "export.timestamp_format".to_string(),
                    message: format!("invalid strftime pattern: {format}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.laurel/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".laurel").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LaurelConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: LaurelConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut LaurelConfig, other: &LaurelConfig) {
        if other.roster.name_column.is_some() {
            base.roster.name_column = other.roster.name_column.clone();
        }
        if other.roster.accolade_prefix.is_some() {
            base.roster.accolade_prefix = other.roster.accolade_prefix.clone();
        }
        if other.export.output_dir.is_some() {
            base.export.output_dir = other.export.output_dir.clone();
        }
        if other.export.timestamp_format.is_some() {
            base.export.timestamp_format = other.export.timestamp_format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LAUREL_ROSTER_NAME_COLUMN`, `LAUREL_EXPORT_OUTPUT_DIR`, etc.
    fn apply_env_overrides(config: &mut LaurelConfig) {
        if let Ok(val) = std::env::var("LAUREL_ROSTER_NAME_COLUMN") {
            config.roster.name_column = Some(val);
        }
        if let Ok(val) = std::env::var("LAUREL_ROSTER_ACCOLADE_PREFIX") {
            config.roster.accolade_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("LAUREL_EXPORT_OUTPUT_DIR") {
            config.export.output_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("LAUREL_EXPORT_TIMESTAMP_FORMAT") {
            config.export.timestamp_format = Some(val);
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut LaurelConfig, ov: &Overrides) {
        if let Some(ref v) = ov.name_column {
            config.roster.name_column = Some(v.clone());
        }
        if let Some(ref v) = ov.accolade_prefix {
            config.roster.accolade_prefix = Some(v.clone());
        }
        if let Some(ref v) = ov.output_dir {
            config.export.output_dir = Some(v.clone());
        }
        if let Some(ref v) = ov.timestamp_format {
            config.export.timestamp_format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level laurel config directory: `~/.laurel/`.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
