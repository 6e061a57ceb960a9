//! Terminal output.
//!
//! Status lines (`success`, `info`, ...) are chatter: hidden by `--quiet` and
//! in JSON mode. [`OutputManager::data`] carries command results and is never
//! hidden.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Whether error reports on stderr may be colored.
///
/// `config` is `None` when the configuration itself failed to load.
pub fn stderr_color(args: &GlobalArgs, config: Option<&AppConfig>) -> bool {
    color_allowed(args, config, io::stderr().is_terminal())
}

fn color_allowed(args: &GlobalArgs, config: Option<&AppConfig>, is_terminal: bool) -> bool {
    is_terminal && !args.no_color && !config.is_some_and(|c| c.output.no_color)
}

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    fn chatter_hidden(&self) -> bool {
        self.quiet || self.is_json()
    }

    fn status(&self, symbol: &str, msg: &str, paint: fn(&str) -> String) -> io::Result<()> {
        if self.chatter_hidden() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            paint(&format!("{symbol} {msg}"))
        };
        self.term.write_line(&line)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.chatter_hidden() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status("\u{26a0}", msg, |s| s.yellow().to_string())
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2139}", msg, |s| s.blue().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.chatter_hidden() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Command result text; printed regardless of `--quiet`.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Command result as a pretty JSON document.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.data(&text)
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}
