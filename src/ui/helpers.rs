//! Text helpers shared by the renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, ending in "..." when
/// something was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

/// Longest prefix of `s` that fits in `max_width` columns.
fn take_width(s: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
