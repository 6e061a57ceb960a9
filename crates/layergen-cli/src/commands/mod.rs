//! One module per subcommand. Handlers translate arguments and config into
//! core calls and render the result; no generation logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod layers;
