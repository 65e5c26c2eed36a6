//! Result type aliases.

use super::config::ConfigError;
use super::picker::PickerError;

/// Result of a picker lifecycle operation.
pub type PickResult<T> = Result<T, PickerError>;

/// Result of building or loading configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
