//! Colors for the picker demo.
//!
//! CSS colors from the picker config are mapped onto terminal RGB by
//! blending their alpha over the page background.

use ratatui::style::Color;

use crate::document::{CssColor, Rgba};

// ============================================================================
// Page palette
// ============================================================================

/// Page background, also the backdrop translucent colors blend over.
pub const PAGE_BG: (u8, u8, u8) = (18, 18, 28);

pub const COLOR_PAGE_BG: Color = Color::Rgb(PAGE_BG.0, PAGE_BG.1, PAGE_BG.2);

/// Container borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Headings
pub const COLOR_HEADING: Color = Color::White;

/// Links
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204);

/// Buttons on the page
pub const COLOR_BUTTON: Color = Color::Rgb(4, 181, 117);

// ============================================================================
// Chrome
// ============================================================================

/// Toggle button while disarmed
pub const COLOR_TOGGLE_IDLE: Color = Color::Rgb(90, 110, 230);

/// Toggle button while armed
pub const COLOR_TOGGLE_ARMED: Color = Color::Rgb(150, 80, 210);

/// Status bar background
pub const COLOR_STATUS_BG: Color = Color::Rgb(10, 15, 35);

/// Dim status text
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// CSS color conversion
// ============================================================================

/// Composite `rgba` over `backdrop`.
pub fn blend(rgba: Rgba, backdrop: (u8, u8, u8)) -> Color {
    let alpha = rgba.a.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| -> u8 {
        (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(
        mix(rgba.r, backdrop.0),
        mix(rgba.g, backdrop.1),
        mix(rgba.b, backdrop.2),
    )
}

/// Terminal color for a CSS color drawn on the page.
pub fn css_to_color(color: &CssColor) -> Color {
    blend(color.rgba(), PAGE_BG)
}
