//! Picker configuration.
//!
//! Mirrors the options a host passes when mounting a picker. Every field has
//! a default, so an empty JSON object is a valid config.
//!
//! # Example
//!
//! ```
//! use elpick::config::PickerConfig;
//!
//! let config = PickerConfig::from_json_str(r#"{ "highlightColor": "red" }"#).unwrap();
//! assert_eq!(config.highlight_color.as_str(), "red");
//! assert_eq!(config.border_width.as_px(), 2.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{CssColor, Length, Rgba};
use crate::error::{ConfigError, ConfigResult};

/// Default overlay fill.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "rgba(130, 180, 230, 0.4)";
/// Default overlay border color.
pub const DEFAULT_OUTLINE_COLOR: &str = "rgba(130, 180, 230, 0.8)";
/// Default overlay border thickness in pixels.
pub const DEFAULT_BORDER_WIDTH_PX: f64 = 2.0;
/// Default overlay paint order.
pub const DEFAULT_STACKING_ORDER: i32 = 10_000;

/// Visual configuration of a picker's overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Overlay fill color
    pub highlight_color: CssColor,
    /// Overlay border color
    pub outline_color: CssColor,
    /// Overlay border thickness
    pub border_width: Length,
    /// Overlay z-index; a numeric string such as `"10000"` is accepted too
    #[serde(alias = "zIndex", deserialize_with = "deserialize_stacking_order")]
    pub stacking_order: i32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            highlight_color: CssColor::new(DEFAULT_HIGHLIGHT_COLOR, default_rgba(0.4)),
            outline_color: CssColor::new(DEFAULT_OUTLINE_COLOR, default_rgba(0.8)),
            border_width: Length::px(DEFAULT_BORDER_WIDTH_PX),
            stacking_order: DEFAULT_STACKING_ORDER,
        }
    }
}

fn default_rgba(a: f32) -> Rgba {
    Rgba {
        r: 130,
        g: 180,
        b: 230,
        a,
    }
}

impl PickerConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlay fill color.
    pub fn with_highlight_color(mut self, color: &str) -> ConfigResult<Self> {
        self.highlight_color = parse_color("highlightColor", color)?;
        Ok(self)
    }

    /// Set the overlay border color.
    pub fn with_outline_color(mut self, color: &str) -> ConfigResult<Self> {
        self.outline_color = parse_color("outlineColor", color)?;
        Ok(self)
    }

    /// Set the overlay border thickness, e.g. `"3px"`.
    pub fn with_border_width(mut self, width: &str) -> ConfigResult<Self> {
        self.border_width = width.parse().map_err(|_| ConfigError::InvalidLength {
            field: "borderWidth",
            value: width.to_string(),
        })?;
        Ok(self)
    }

    /// Set the overlay z-index.
    pub fn with_stacking_order(mut self, order: i32) -> Self {
        self.stacking_order = order;
        self
    }

    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded picker config");
        Ok(config)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StackingOrderRepr {
    Number(i32),
    Text(String),
}

fn deserialize_stacking_order<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StackingOrderRepr::deserialize(deserializer)? {
        StackingOrderRepr::Number(order) => Ok(order),
        StackingOrderRepr::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("invalid stacking order {:?}", text))
        }),
    }
}

fn parse_color(field: &'static str, value: &str) -> ConfigResult<CssColor> {
    value.parse().map_err(|_| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}
