//! Inline style for elements and the document body.

use serde::{Deserialize, Serialize};

use super::color::{CssColor, Length};
use super::geometry::DomRect;

/// The `overflow` mode of the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn as_css(&self) -> &'static str {
        match self {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Scroll => "scroll",
            Overflow::Auto => "auto",
        }
    }
}

/// Pointer cursor shown over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Crosshair,
    Text,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::Crosshair => "crosshair",
            Cursor::Text => "text",
        }
    }
}

/// Positioning scheme of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Laid out in normal flow; its box comes from the element's layout.
    #[default]
    Static,
    /// Placed at an explicit box in page coordinates.
    Absolute,
}

/// Whether an element takes part in hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
}

/// A solid border.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: Length,
    pub color: CssColor,
}

/// Inline style of a single element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyle {
    pub position: Position,
    pub pointer_events: PointerEvents,
    pub background: Option<CssColor>,
    pub border: Option<Border>,
    pub z_index: Option<i32>,
    pub transition: Option<String>,
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ElementStyle {
    /// The explicit box set through top/left/width/height, if all four are set.
    pub fn placed_box(&self) -> Option<DomRect> {
        Some(DomRect::new(self.left?, self.top?, self.width?, self.height?))
    }

    pub fn set_box(&mut self, rect: DomRect) {
        self.top = Some(rect.top());
        self.left = Some(rect.left());
        self.width = Some(rect.width);
        self.height = Some(rect.height);
    }

    /// Serialize to a `style` attribute string, skipping unset properties.
    pub fn css_text(&self) -> String {
        let mut decls = Vec::new();
        if self.position == Position::Absolute {
            decls.push("position: absolute".to_string());
        }
        if self.pointer_events == PointerEvents::None {
            decls.push("pointer-events: none".to_string());
        }
        if let Some(bg) = &self.background {
            decls.push(format!("background-color: {}", bg));
        }
        if let Some(border) = &self.border {
            decls.push(format!("border: {} solid {}", border.width, border.color));
        }
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {}", transition));
        }
        if let Some(z) = self.z_index {
            decls.push(format!("z-index: {}", z));
        }
        for (name, value) in [
            ("top", self.top),
            ("left", self.left),
            ("width", self.width),
            ("height", self.height),
        ] {
            if let Some(value) = value {
                decls.push(format!("{}: {}px", name, value));
            }
        }
        decls.join("; ")
    }
}

/// Document-wide style properties that a picker overrides while armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyStyle {
    /// Inline overflow mode; `None` means the property is unset.
    pub overflow: Option<Overflow>,
    pub cursor: Cursor,
}

impl BodyStyle {
    /// Scrolling is suspended while the body overflow is hidden.
    pub fn scroll_locked(&self) -> bool {
        self.overflow == Some(Overflow::Hidden)
    }
}
