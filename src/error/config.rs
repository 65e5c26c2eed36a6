//! Errors raised while building or loading a [`PickerConfig`](crate::config::PickerConfig).

use thiserror::Error;

/// Error type for picker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A color field could not be parsed as a CSS color.
    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// A length field could not be parsed as a pixel length.
    #[error("invalid length for {field}: {value:?}")]
    InvalidLength { field: &'static str, value: String },

    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for a picker config.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
