//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "layergen",
    bin_name = "layergen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Layered component scaffolding",
    long_about = "Layergen creates one folder per architectural layer and writes a \
                  wired-up repository, service and factory for a component.",
    after_help = "EXAMPLES:\n\
        \x20 layergen generate heroes\n\
        \x20 layergen generate heroes -l repository -l service --root ./my-app\n\
        \x20 layergen generate orders --lang ts --output-folder lib\n\
        \x20 layergen completions bash > /usr/share/bash-completion/completions/layergen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate layer folders and files for a component.
    #[command(
        visible_aliases = ["g", "new"],
        about = "Generate a component across layers",
        after_help = "EXAMPLES:\n\
            \x20 layergen generate heroes\n\
            \x20 layergen generate heroes --layer repository,service\n\
            \x20 layergen generate heroes --dry-run\n\
            \x20 layergen generate heroes --fail-fast --timeout-ms 2000"
    )]
    Generate(GenerateArgs),

    /// List the layers that can be generated.
    #[command(
        visible_alias = "ls",
        about = "List available layers",
        after_help = "EXAMPLES:\n\
            \x20 layergen layers\n\
            \x20 layergen layers --lang ts\n\
            \x20 layergen layers --format json"
    )]
    Layers(LayersArgs),

    /// Initialise a Layergen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 layergen init           # platform config location\n\
            \x20 layergen init --local   # .layergen.toml in CWD\n\
            \x20 layergen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 layergen completions bash > ~/.local/share/bash-completion/completions/layergen\n\
            \x20 layergen completions zsh  > ~/.zfunc/_layergen\n\
            \x20 layergen completions fish > ~/.config/fish/completions/layergen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Layergen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 layergen config get defaults.language\n\
            \x20 layergen config list\n\
            \x20 layergen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `layergen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Component name, used as the prefix of every generated class.
    #[arg(value_name = "COMPONENT", help = "Component name (e.g. heroes)")]
    pub component: String,

    /// Layers to generate. Repeat the flag or separate with commas.
    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        value_delimiter = ',',
        help = "Layer to generate (repository, service, factory); default: all"
    )]
    pub layers: Vec<String>,

    /// Project root the output folder is resolved against.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Folder under the root that holds the layer folders.
    #[arg(
        short = 'o',
        long = "output-folder",
        value_name = "DIR",
        help = "Folder under the root holding the layer folders (default: src)"
    )]
    pub output_folder: Option<PathBuf>,

    /// Language of the generated files.
    #[arg(long = "lang", value_name = "LANGUAGE", value_enum, help = "Language of the generated files")]
    pub language: Option<LanguageArg>,

    /// Directory with template overrides.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory of <language>/<layer>.<ext>.tpl overrides"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Abandon the remaining writes after the first failure.
    #[arg(long = "fail-fast", help = "Cancel remaining writes after the first failure")]
    pub fail_fast: bool,

    /// Upper bound for each file write, in milliseconds.
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Per-write timeout in milliseconds (default: 5000)"
    )]
    pub timeout_ms: Option<u64>,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `layergen layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Language whose templates are listed.
    #[arg(long = "lang", value_enum, help = "Language to list (default: configured language)")]
    pub language: Option<LanguageArg>,

    /// Directory with template overrides, resolved as for `generate`.
    #[arg(long = "templates-dir", value_name = "DIR", help = "Directory of template overrides")]
    pub templates_dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `layergen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.layergen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `layergen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `layergen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Languages the generated files can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LanguageArg {
    /// Also accepted as `js`.
    #[value(alias = "js")]
    JavaScript,
    /// Also accepted as `ts`.
    #[value(alias = "ts")]
    TypeScript,
}

impl From<LanguageArg> for layergen_core::domain::Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::JavaScript => Self::JavaScript,
            LanguageArg::TypeScript => Self::TypeScript,
        }
    }
}

impl std::fmt::Display for LanguageArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JavaScript => write!(f, "javascript"),
            Self::TypeScript => write!(f, "typescript"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn language_display() {
        assert_eq!(LanguageArg::JavaScript.to_string(), "javascript");
        assert_eq!(LanguageArg::TypeScript.to_string(), "typescript");
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["layergen", "generate", "heroes"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.component, "heroes");
        assert!(args.layers.is_empty());
        assert!(!args.dry_run);
    }

    #[test]
    fn layers_accept_repeats_and_commas() {
        let cli = Cli::parse_from([
            "layergen", "g", "heroes", "-l", "repository,service", "--layer", "factory",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.layers, ["repository", "service", "factory"]);
    }

    #[test]
    fn unknown_layer_is_not_rejected_by_parser() {
        let cli = Cli::try_parse_from(["layergen", "generate", "heroes", "-l", "controller"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn language_aliases() {
        let cli = Cli::parse_from(["layergen", "new", "heroes", "--lang", "ts"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.language, Some(LanguageArg::TypeScript));
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = Cli::try_parse_from(["layergen", "generate", "heroes", "--timeout-ms", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["layergen", "--quiet", "--verbose", "layers"]);
        assert!(result.is_err());
    }
}
