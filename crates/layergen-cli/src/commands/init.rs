//! `layergen init`: write a configuration file holding the defaults.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, _config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if args.force && path.exists() {
        output.warning(&format!("Overwriting {}", path.display()))?;
    }
    write_default_config(&path, args.force)?;
    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let text = AppConfig::default().to_toml()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "Configuration written");
    Ok(())
}
