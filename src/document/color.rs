//! CSS value types used in inline styles: colors and pixel lengths.
//!
//! Values keep the text they were parsed from so that styles can be written
//! back verbatim (`rgba(130, 180, 230, 0.4)` stays `rgba(130, 180, 230, 0.4)`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A CSS value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized CSS {kind} {value:?}")]
pub struct ParseCssError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseCssError {
    fn color(value: &str) -> Self {
        Self {
            kind: "color",
            value: value.to_string(),
        }
    }

    fn length(value: &str) -> Self {
        Self {
            kind: "length",
            value: value.to_string(),
        }
    }
}

/// Resolved channel values of a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("black", Rgba::opaque(0, 0, 0)),
    ("white", Rgba::opaque(255, 255, 255)),
    ("red", Rgba::opaque(255, 0, 0)),
    ("green", Rgba::opaque(0, 128, 0)),
    ("lime", Rgba::opaque(0, 255, 0)),
    ("blue", Rgba::opaque(0, 0, 255)),
    ("yellow", Rgba::opaque(255, 255, 0)),
    ("cyan", Rgba::opaque(0, 255, 255)),
    ("aqua", Rgba::opaque(0, 255, 255)),
    ("magenta", Rgba::opaque(255, 0, 255)),
    ("fuchsia", Rgba::opaque(255, 0, 255)),
    ("gray", Rgba::opaque(128, 128, 128)),
    ("grey", Rgba::opaque(128, 128, 128)),
    ("silver", Rgba::opaque(192, 192, 192)),
    ("orange", Rgba::opaque(255, 165, 0)),
    ("purple", Rgba::opaque(128, 0, 128)),
    ("navy", Rgba::opaque(0, 0, 128)),
    ("teal", Rgba::opaque(0, 128, 128)),
    (
        "transparent",
        Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        },
    ),
];

/// A CSS color such as `red`, `#82b4e6` or `rgba(130, 180, 230, 0.4)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor {
    text: String,
    rgba: Rgba,
}

impl CssColor {
    /// Build a color from already-resolved channels and the text to emit.
    pub fn new(text: impl Into<String>, rgba: Rgba) -> Self {
        Self {
            text: text.into(),
            rgba,
        }
    }

    /// The color exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for CssColor {
    type Err = ParseCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let lower = text.to_ascii_lowercase();

        let rgba = if let Some(hex) = lower.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = function_args(&lower, "rgba") {
            parse_rgb_args(args, true)
        } else if let Some(args) = function_args(&lower, "rgb") {
            parse_rgb_args(args, false)
        } else {
            NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, rgba)| *rgba)
        };

        rgba.map(|rgba| Self {
            text: text.to_string(),
            rgba,
        })
        .ok_or_else(|| ParseCssError::color(s))
    }
}

impl TryFrom<String> for CssColor {
    type Error = ParseCssError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CssColor> for String {
    fn from(color: CssColor) -> Self {
        color.text
    }
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let digit = channel(&c.to_string())?;
                out[i] = digit * 17;
            }
            Some(Rgba::opaque(out[0], out[1], out[2]))
        }
        6 => Some(Rgba::opaque(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Option<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |s: &str| -> Option<u8> {
        let value: f64 = s.parse().ok()?;
        (0.0..=255.0).contains(&value).then(|| value.round() as u8)
    };

    let a = if with_alpha {
        let alpha: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        alpha
    } else {
        1.0
    };

    Some(Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}

/// A non-negative length in CSS pixels, written as `"2px"` or a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LengthRepr", into = "String")]
pub struct Length(f64);

impl Length {
    pub fn px(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn as_px(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl FromStr for Length {
    type Err = ParseCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Self(value)),
            _ => Err(ParseCssError::length(s)),
        }
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = ParseCssError;

    fn try_from(repr: LengthRepr) -> Result<Self, Self::Error> {
        match repr {
            LengthRepr::Number(value) if value.is_finite() && value >= 0.0 => Ok(Self(value)),
            LengthRepr::Number(value) => Err(ParseCssError::length(&value.to_string())),
            LengthRepr::Text(text) => text.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_color() {
        let color: CssColor = "Red".parse().unwrap();
        assert_eq!(color.rgba(), Rgba::opaque(255, 0, 0));
        assert_eq!(color.as_str(), "Red");
    }

    #[test]
    fn test_parse_hex_colors() {
        let long: CssColor = "#82b4e6".parse().unwrap();
        assert_eq!(long.rgba(), Rgba::opaque(130, 180, 230));

        let short: CssColor = "#f0a".parse().unwrap();
        assert_eq!(short.rgba(), Rgba::opaque(255, 0, 170));
    }

    #[test]
    fn test_parse_rgba_keeps_original_text() {
        let color: CssColor = "rgba(130, 180, 230, 0.4)".parse().unwrap();
        let rgba = color.rgba();
        assert_eq!((rgba.r, rgba.g, rgba.b), (130, 180, 230));
        assert!((rgba.a - 0.4).abs() < f32::EPSILON);
        assert_eq!(color.to_string(), "rgba(130, 180, 230, 0.4)");
    }

    #[test]
    fn test_parse_rgb_without_alpha() {
        let color: CssColor = "rgb(1, 2, 3)".parse().unwrap();
        assert_eq!(color.rgba(), Rgba::opaque(1, 2, 3));
    }

    #[test]
    fn test_reject_malformed_colors() {
        for input in ["bluish", "#12", "#gggggg", "rgb(1, 2)", "rgba(1, 2, 3, 2)", "rgb(300, 0, 0)"] {
            assert!(input.parse::<CssColor>().is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn test_parse_lengths() {
        assert_eq!("2px".parse::<Length>().unwrap().as_px(), 2.0);
        assert_eq!(" 1.5 ".parse::<Length>().unwrap().as_px(), 1.5);
        assert!("-1px".parse::<Length>().is_err());
        assert!("thick".parse::<Length>().is_err());
        assert_eq!(Length::px(3.0).to_string(), "3px");
    }

    #[test]
    fn test_length_deserializes_from_number_or_text() {
        let from_text: Length = serde_json::from_str("\"4px\"").unwrap();
        let from_number: Length = serde_json::from_str("4").unwrap();
        assert_eq!(from_text, from_number);
    }
}
