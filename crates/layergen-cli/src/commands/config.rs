//! `layergen config`: inspect the effective configuration.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<&Path>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.data(&display_value(&value))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current configuration:")?;
                output.data(config.to_toml()?.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.data(&active_config_path(explicit).display().to_string())?;
        }
    }

    Ok(())
}

/// Dotted key lookup, e.g. `generation.write_timeout_ms`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise configuration: {e}"),
    })?;

    let pointer = format!("/{}", key.trim().replace('.', "/"));
    match tree.pointer(&pointer) {
        Some(value) if !key.trim().is_empty() => Ok(value.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
        }),
    }
}

/// Strings without quotes, lists comma separated, tables as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// `--config`, else a local `.layergen.toml`, else the platform file.
fn active_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return local;
    }
    AppConfig::config_path()
}
