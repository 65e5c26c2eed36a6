//! CLI module for `elpick`.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use elpick::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let config_path = match run_cli_command(command) {
//!     Ok(path) => path,
//!     Err(code) => std::process::exit(code),
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_help_command, handle_version_command, version_line, VERSION};

use std::path::PathBuf;

/// Run a CLI command if applicable.
///
/// Returns the config path for `Run`, or the process exit code when the
/// arguments were invalid. `Version` and `Help` exit the process.
pub fn run_cli_command(command: CliCommand) -> Result<Option<PathBuf>, i32> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run { config } => Ok(config),
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            Err(2)
        }
    }
}
