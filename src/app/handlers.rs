//! Terminal event handling.
//!
//! Mouse motion becomes pointer movement, a left click either presses the
//! toggle button or clicks the document, the wheel scrolls the page and keys
//! are forwarded as keydown signals. `p` presses the toggle. While the
//! picker is armed, `q` is just another key; Ctrl-C always quits.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::page::CELL_HEIGHT;
use super::App;
use crate::document::Key;

/// Rows scrolled per wheel notch.
const WHEEL_ROWS: f64 = 3.0;

impl App {
    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => self.needs_redraw = true,
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') if !self.is_armed() => self.quit(),
            KeyCode::Char('p') => self.toggle_picker(),
            KeyCode::Up => self.scroll_rows(-1.0),
            KeyCode::Down => self.scroll_rows(1.0),
            KeyCode::PageUp => self.scroll_rows(-f64::from(self.page_viewport.area.height)),
            KeyCode::PageDown => self.scroll_rows(f64::from(self.page_viewport.area.height)),
            KeyCode::Esc => self.key_down(Key::Escape),
            KeyCode::Enter => self.key_down(Key::Enter),
            KeyCode::Char(c) => self.key_down(Key::Char(c)),
            _ => self.key_down(Key::Other),
        }
    }

    fn key_down(&mut self, key: Key) {
        let was_armed = self.is_armed();
        self.document.key_down(key);
        if was_armed && !self.is_armed() {
            self.status = Some("picker cancelled".to_string());
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                match self.page_viewport.client_point(column, row) {
                    Some(point) => {
                        if self.document.pointer_move(point).is_some() {
                            self.needs_redraw = true;
                        }
                    }
                    None => self.document.pointer_leave(),
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.needs_redraw = true;
                if self.toggle_area.contains((column, row).into()) {
                    self.document.pointer_leave();
                    self.toggle_picker();
                    return;
                }
                let Some(point) = self.page_viewport.client_point(column, row) else {
                    return;
                };
                let picks_before = self.selections.borrow().len();
                let outcome = self.document.click_at(point);
                if let Some(href) = outcome.navigated {
                    self.status = Some(format!("navigated to {}", href));
                } else if self.selections.borrow().len() > picks_before {
                    let last = self.selections.borrow().last().map(|info| info.selector());
                    self.status = last.map(|selector| format!("picked {}", selector));
                }
            }
            MouseEventKind::ScrollDown => self.scroll_rows(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_rows(-WHEEL_ROWS),
            _ => {}
        }
    }

    fn scroll_rows(&mut self, rows: f64) {
        if self.document.scroll_by(0.0, rows * CELL_HEIGHT) {
            self.needs_redraw = true;
        } else if self.document.body_style().scroll_locked() {
            tracing::debug!("scroll ignored while the picker is armed");
        }
    }
}
