//! Status bar: picker state, document side effects and the last event.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::{COLOR_DIM, COLOR_HEADING, COLOR_STATUS_BG, COLOR_TOGGLE_ARMED};
use crate::app::App;
use crate::picker::ElementInfo;

/// Plain-text status line for the current app state.
pub fn status_text(app: &App) -> String {
    let doc = &app.document;
    let body = doc.body_style();
    let state = app
        .picker
        .as_ref()
        .map_or_else(|| "unmounted".to_string(), |picker| picker.state().to_string());
    let hovered = app
        .picker
        .as_ref()
        .and_then(|picker| picker.hovered())
        .and_then(|id| doc.get(id))
        .map_or_else(|| "-".to_string(), |el| ElementInfo::from_element(el).selector());

    let mut text = format!(
        "{} | cursor: {} | overflow: {} | hover: {} | picks: {}",
        state,
        body.cursor.as_css(),
        body.overflow.map_or("unset", |overflow| overflow.as_css()),
        hovered,
        app.selections.borrow().len(),
    );
    if let Some(status) = &app.status {
        text.push_str(" | ");
        text.push_str(status);
    }
    text
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = truncate_to_width(&status_text(app), area.width.saturating_sub(1) as usize);
    let fg = if app.is_armed() {
        COLOR_TOGGLE_ARMED
    } else {
        COLOR_DIM
    };
    let line = Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(text, Style::default().fg(fg).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(COLOR_STATUS_BG).fg(COLOR_HEADING)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;

    #[test]
    fn test_status_reflects_side_effects() {
        let mut app = App::new(PickerConfig::default()).unwrap();
        assert_eq!(
            status_text(&app),
            "disarmed | cursor: default | overflow: unset | hover: - | picks: 0"
        );

        app.toggle_picker();
        assert_eq!(
            status_text(&app),
            "armed | cursor: crosshair | overflow: hidden | hover: - | picks: 0 | picker armed"
        );
        app.shutdown();
    }
}
