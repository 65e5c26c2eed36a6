//! Version and help output.

use super::args::USAGE;

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `elpick <version>`
pub fn version_line() -> String {
    format!("elpick {}", VERSION)
}

/// Handle `--version`: print and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle `--help`: print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}
