//! # Layergen CLI
//!
//! Generates one folder and one wired-up file per architectural layer of a
//! component.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, parse arguments
//! 2. Initialise tracing
//! 3. Load configuration (defaults, files, `LAYERGEN_*`)
//! 4. Dispatch to the command handler
//! 5. Turn any [`CliError`] into a message and exit code
//!
//! ## Exit codes
//!
//! | Code | Meaning                           |
//! |------|-----------------------------------|
//! |  0   | Success                           |
//! |  1   | A write or directory failed       |
//! |  2   | Invalid input                     |
//! |  3   | Unknown layer                     |
//! |  4   | Configuration error               |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::{OutputManager, stderr_color},
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, stderr_color(&cli.global, None)),
    };

    let output = OutputManager::new(&cli.global, &config);
    let color = stderr_color(&cli.global, Some(&config));

    match run(cli, config, output) {
        Ok(()) => {
            info!("Layergen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, &config, &output),
        Commands::Layers(args) => commands::layers::execute(args, &config, &output),
        Commands::Init(args) => commands::init::execute(args, &config, &output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config.as_deref(), &config, &output)
        }
    }
}

/// The one place a [`CliError`] becomes stderr text and an exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
