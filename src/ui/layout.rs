//! Screen layout: toolbar on top, the page in the middle, status bar last.

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub toolbar: Rect,
    pub page: Rect,
    pub status: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let [toolbar, page, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            toolbar,
            page,
            status,
        }
    }
}

/// Right-aligned button of `width` columns inside `toolbar`.
pub fn toggle_button_area(toolbar: Rect, width: u16) -> Rect {
    let width = width.min(toolbar.width);
    Rect::new(toolbar.right() - width, toolbar.y, width, toolbar.height.min(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reserves_one_row_each() {
        let areas = ScreenAreas::split(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.toolbar, Rect::new(0, 0, 80, 1));
        assert_eq!(areas.page, Rect::new(0, 1, 80, 22));
        assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_toggle_button_right_aligned() {
        assert_eq!(toggle_button_area(Rect::new(0, 0, 80, 1), 10), Rect::new(70, 0, 10, 1));
        assert_eq!(toggle_button_area(Rect::new(0, 0, 4, 1), 10), Rect::new(0, 0, 4, 1));
    }
}
