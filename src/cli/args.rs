//! Command-line argument parsing for `elpick`.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the interactive picker demo (default)
    Run {
        /// Picker configuration file (JSON)
        config: Option<PathBuf>,
    },
    /// Arguments could not be understood
    Invalid(String),
}

/// Usage text printed by `--help` and on invalid arguments.
pub const USAGE: &str = "\
Usage: elpick [--config <file>] [--version] [--help]

Options:
  -c, --config <file>  Load picker colors and stacking order from a JSON file
  -V, --version        Print version and exit
  -h, --help           Print this help and exit

Environment:
  ELPICK_LOG           Tracing filter (default: info)";

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use elpick::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["elpick".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut config = None;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--config" | "-c" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid(format!("{} requires a file path", arg)),
            },
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    config = Some(PathBuf::from(path));
                } else {
                    return CliCommand::Invalid(format!("unknown argument: {}", other));
                }
            }
        }
    }
    CliCommand::Run { config }
}
