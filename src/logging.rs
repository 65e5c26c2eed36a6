//! Tracing setup for the `elpick` binary.
//!
//! Stdout belongs to the terminal UI while it runs, so log output goes to a
//! file under the user cache dir. The filter comes from `ELPICK_LOG` and
//! falls back to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "ELPICK_LOG";

/// Filter used when `ELPICK_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_FILE_NAME: &str = "elpick.log";

/// Default log file: `<cache dir>/elpick/elpick.log`, or the working
/// directory when no cache dir is known.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("elpick"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

/// Build the filter from `ELPICK_LOG`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `log_path`.
///
/// Returns the path actually used. Installing twice is a no-op.
pub fn init(log_path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = log_path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init();

    Ok(path)
}
