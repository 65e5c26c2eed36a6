//! Draws the document: every element as a box or a line of text, then the
//! picker overlay on top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget, Wrap},
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::{
    css_to_color, COLOR_BORDER, COLOR_BUTTON, COLOR_HEADING, COLOR_LINK, COLOR_PAGE_BG, COLOR_TEXT,
};
use crate::app::page::CELL_HEIGHT;
use crate::app::App;
use crate::document::{DomRect, Element, ElementStyle};
use crate::picker::ElementInfo;

/// Elements at least this many rows tall are drawn as bordered boxes.
const BOX_MIN_ROWS: u16 = 3;

pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_PAGE_BG)), area);

    let doc = &app.document;
    let viewport = app.page_viewport;
    let body = doc.body();
    let overlay = app.picker.as_ref().and_then(|picker| picker.overlay());

    for id in doc.tree_order() {
        if id == body || Some(id) == overlay {
            continue;
        }
        let (Some(element), Some(client)) = (doc.get(id), doc.bounding_client_rect(id)) else {
            continue;
        };
        if let Some(cells) = viewport.cell_rect(client) {
            render_element(frame.buffer_mut(), cells, client, element);
        }
    }

    let overlay = overlay.filter(|id| doc.is_connected(*id));
    if let Some(id) = overlay {
        let (Some(element), Some(client)) = (doc.get(id), doc.bounding_client_rect(id)) else {
            return;
        };
        if let Some(cells) = viewport.cell_rect(client) {
            render_overlay(frame.buffer_mut(), cells, element.style());
        }
    }
}

fn text_style(tag: &str) -> Style {
    match tag {
        "A" => Style::default().fg(COLOR_LINK).add_modifier(Modifier::UNDERLINED),
        "BUTTON" => Style::default().fg(COLOR_PAGE_BG).bg(COLOR_BUTTON),
        "H1" | "H2" => Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(COLOR_TEXT),
    }
}

fn render_element(buf: &mut Buffer, cells: Rect, client: DomRect, element: &Element) {
    if cells.height >= BOX_MIN_ROWS {
        let selector = ElementInfo::from_element(element).selector();
        let title = truncate_to_width(&selector, cells.width.saturating_sub(2) as usize);
        Block::bordered()
            .title(title)
            .border_style(Style::default().fg(COLOR_BORDER))
            .render(cells, buf);
        return;
    }

    let Some(text) = element.text() else {
        return;
    };
    let text = match element.tag_name() {
        "LI" => format!("• {}", text),
        "BUTTON" => format!(" {} ", text),
        _ => text.to_string(),
    };
    // Rows scrolled off the top of the page area.
    let hidden_rows = if client.top() < 0.0 {
        (-client.top() / CELL_HEIGHT).ceil() as u16
    } else {
        0
    };
    Paragraph::new(text)
        .style(text_style(element.tag_name()))
        .wrap(Wrap { trim: true })
        .scroll((hidden_rows, 0))
        .render(cells, buf);
}

/// Tint the covered cells with the highlight fill and outline them.
fn render_overlay(buf: &mut Buffer, cells: Rect, style: &ElementStyle) {
    if let Some(fill) = &style.background {
        buf.set_style(cells, Style::default().bg(css_to_color(fill)));
    }
    if let Some(border) = &style.border {
        if cells.width >= 2 && cells.height >= 2 {
            Block::bordered()
                .border_style(Style::default().fg(css_to_color(&border.color)))
                .render(cells, buf);
        }
    }
}
