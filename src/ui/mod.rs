//! Terminal rendering for the `elpick` demo.
//!
//! One frame is a toolbar holding the activation toggle, the document page
//! with the highlight overlay drawn last, and a status bar showing the
//! picker state plus the cursor and overflow the document currently has.
//! Rendering also records the page and toggle areas the event handlers
//! hit-test against.

mod helpers;
mod layout;
mod page_view;
mod status;
mod theme;
mod toolbar;

pub use helpers::truncate_to_width;
pub use layout::{toggle_button_area, ScreenAreas};
pub use status::status_text;
pub use theme::{blend, css_to_color};

use ratatui::Frame;

use crate::app::App;

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = ScreenAreas::split(frame.area());
    app.set_page_area(areas.page);

    app.toggle_area = toolbar::render_toolbar(frame, areas.toolbar, app);
    page_view::render_page(frame, areas.page, app);
    status::render_status_bar(frame, areas.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    #[test]
    fn test_render_records_hit_areas() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(PickerConfig::default()).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert_eq!(app.page_viewport.area, Rect::new(0, 1, 80, 22));
        assert_eq!(app.toggle_area.y, 0);
        assert_eq!(app.toggle_area.right(), 80);
    }

    #[test]
    fn test_render_armed_with_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(PickerConfig::default()).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        app.toggle_picker();
        app.document.pointer_move(crate::document::Point::new(52.0, 168.0));
        assert!(app.picker.as_ref().and_then(|p| p.hovered()).is_some());
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        app.shutdown();
    }
}
