//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup. The core crates never see it;
//! commands turn it into request defaults and [`GeneratorOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the commands)
//! 2. `LAYERGEN_*` environment variables, `__` between path segments
//!    (`LAYERGEN_GENERATION__WRITE_TIMEOUT_MS=2000`)
//! 3. `--config FILE`, or else `.layergen.toml` in the current directory
//!    layered over the platform config file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use layergen_core::application::GeneratorOptions;
use layergen_core::domain::{Language, Layer};

use crate::error::{CliError, CliResult};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".layergen.toml";

const ENV_PREFIX: &str = "LAYERGEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
    pub templates: TemplateConfig,
}

/// Values used when the matching `generate` flag is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub output_folder: PathBuf,
    pub language: String,
    pub layers: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("src"),
            language: Language::JavaScript.as_str().to_owned(),
            layers: Layer::ALL.iter().map(|l| l.as_str().to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub write_timeout_ms: u64,
    pub fail_fast: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            write_timeout_ms: GeneratorOptions::DEFAULT_WRITE_TIMEOUT.as_millis() as u64,
            fail_fast: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<language>/<layer>.<ext>.tpl` overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from files and the environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(global) = Self::global_config_path() {
                    builder = builder.add_source(
                        File::from(global).format(FileFormat::Toml).required(false),
                    );
                }
                builder = builder.add_source(
                    File::from(PathBuf::from(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("defaults.layers"),
            )
            .build()
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
            })?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
            })?;

        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.language()?;
        if self.generation.write_timeout_ms == 0 {
            return Err(CliError::ConfigError {
                message: "generation.write_timeout_ms must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// The configured default language.
    pub fn language(&self) -> CliResult<Language> {
        self.defaults
            .language
            .parse()
            .map_err(|_| CliError::ConfigError {
                message: format!(
                    "Unknown language '{}' in defaults.language (expected javascript or typescript)",
                    self.defaults.language
                ),
            })
    }

    /// Generator options from the `generation` table.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions::default()
            .with_write_timeout(Duration::from_millis(self.generation.write_timeout_ms))
            .with_fail_fast(self.generation.fail_fast)
    }

    /// Platform config file, e.g. `~/.config/layergen/config.toml` on Linux.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "layergen", "layergen")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn config_path() -> PathBuf {
        Self::global_config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Serialise as TOML, the format the config files use.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise configuration: {e}"),
        })
    }
}
