//! Toolbar with the picker's activation toggle.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::toggle_button_area;
use super::theme::{COLOR_DIM, COLOR_HEADING, COLOR_STATUS_BG, COLOR_TOGGLE_ARMED, COLOR_TOGGLE_IDLE};
use crate::app::App;

/// Draw the toolbar and return the toggle button's area for hit testing.
pub fn render_toolbar(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let title = Line::from(vec![
        Span::styled(" elpick ", Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD)),
        Span::styled("p: pick  esc: cancel  q: quit", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(COLOR_STATUS_BG)),
        area,
    );

    let label = format!(" {} ", app.toggle_label());
    let button = toggle_button_area(area, label.width() as u16 + 2);
    let bg = if app.is_armed() {
        COLOR_TOGGLE_ARMED
    } else {
        COLOR_TOGGLE_IDLE
    };
    frame.render_widget(
        Paragraph::new(format!("[{}]", label))
            .style(Style::default().fg(COLOR_HEADING).bg(bg).add_modifier(Modifier::BOLD)),
        button,
    );
    button
}
