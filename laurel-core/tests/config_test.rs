//! Tests for the Laurel configuration system.

use std::sync::Mutex;

use laurel_core::config::laurel_config::{LaurelConfig, Overrides};
use laurel_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all LAUREL_ env vars to prevent cross-test contamination.
fn clear_laurel_env_vars() {
    for key in [
        "LAUREL_ROSTER_NAME_COLUMN",
        "LAUREL_ROSTER_ACCOLADE_PREFIX",
        "LAUREL_EXPORT_OUTPUT_DIR",
        "LAUREL_EXPORT_TIMESTAMP_FORMAT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layer_resolution_overrides_beat_env_and_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("laurel.toml");
    std::fs::write(
        &project_toml,
        r#"
[roster]
name_column = "full_name"
accolade_prefix = "award_"
"#,
    )
    .unwrap();

    std::env::set_var("LAUREL_ROSTER_NAME_COLUMN", "member");

    let ov = Overrides {
        accolade_prefix: Some("medal_".to_string()),
        ..Default::default()
    };

    let config = LaurelConfig::load(dir.path(), Some(&ov)).unwrap();

    // Overrides beat env and project for the prefix
    assert_eq!(config.roster.effective_accolade_prefix(), "medal_");
    // Env beats project for the name column
    assert_eq!(config.roster.effective_name_column(), "member");

    clear_laurel_env_vars();
}

#[test]
fn test_load_missing_files_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let config = LaurelConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.roster.effective_name_column(), "name");
    assert_eq!(config.roster.effective_accolade_prefix(), "accolade_");
    assert_eq!(config.export.effective_timestamp_format(), "%Y%m%d_%H%M%S");
    assert!(config.export.output_dir.is_none());
}

#[test]
fn test_env_var_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    std::env::set_var("LAUREL_EXPORT_TIMESTAMP_FORMAT", "%Y-%m-%d");

    let config = LaurelConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.export.effective_timestamp_format(), "%Y-%m-%d");

    clear_laurel_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("laurel.toml");
    std::fs::write(&project_toml, "this is not valid toml {{{{").unwrap();

    let result = LaurelConfig::load(dir.path(), None);
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ParseError { .. } => {} // expected
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("laurel.toml");

    // An all-whitespace prefix would make every column a variable column
    std::fs::write(
        &project_toml,
        r#"
[roster]
accolade_prefix = "  "
"#,
    )
    .unwrap();

    let result = LaurelConfig::load(dir.path(), None);
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "roster.accolade_prefix");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_invalid_timestamp_pattern_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("laurel.toml");

    // "%Q" is not a strftime specifier; chrono would only reject it
    // when the first export renders a timestamp
    std::fs::write(
        &project_toml,
        r#"
[export]
timestamp_format = "%Q"
"#,
    )
    .unwrap();

    let result = LaurelConfig::load(dir.path(), None);
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "export.timestamp_format");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_unrecognized_keys_accepted() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("laurel.toml");
    std::fs::write(
        &project_toml,
        r#"
[roster]
name_column = "name"
future_unknown_key = "hello"

[future_section]
another_key = 42
"#,
    )
    .unwrap();

    let result = LaurelConfig::load(dir.path(), None);
    assert!(result.is_ok());
}

#[test]
fn test_config_round_trip() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_laurel_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("laurel.toml");
    std::fs::write(
        &project_toml,
        r#"
[roster]
name_column = "member"
accolade_prefix = "award_"

[export]
timestamp_format = "%Y%m%d"
"#,
    )
    .unwrap();

    let config1 = LaurelConfig::load(dir.path(), None).unwrap();
    let toml_str = config1.to_toml().unwrap();
    let config2 = LaurelConfig::from_toml(&toml_str).unwrap();

    assert_eq!(config1.roster.name_column, config2.roster.name_column);
    assert_eq!(
        config1.roster.accolade_prefix,
        config2.roster.accolade_prefix
    );
    assert_eq!(
        config1.export.timestamp_format,
        config2.export.timestamp_format
    );
}
