//! Mapping between terminal cells and document client coordinates.

use ratatui::layout::Rect;

use super::page::{CELL_HEIGHT, CELL_WIDTH};
use crate::document::{DomRect, Point, Viewport};

/// The terminal region showing the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageViewport {
    pub area: Rect,
}

impl PageViewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Document viewport size for this area.
    pub fn document_viewport(&self) -> Viewport {
        Viewport::new(
            f64::from(self.area.width) * CELL_WIDTH,
            f64::from(self.area.height) * CELL_HEIGHT,
        )
    }

    /// Client point at the centre of the cell under the mouse, if the cell
    /// is inside the page area.
    pub fn client_point(&self, column: u16, row: u16) -> Option<Point> {
        let inside = column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom();
        if !inside {
            return None;
        }
        Some(Point::new(
            (f64::from(column - self.area.x) + 0.5) * CELL_WIDTH,
            (f64::from(row - self.area.y) + 0.5) * CELL_HEIGHT,
        ))
    }

    /// Cells covered by a client-space box, clipped to the page area.
    /// Empty or fully off-screen boxes map to `None`.
    pub fn cell_rect(&self, client: DomRect) -> Option<Rect> {
        if client.width <= 0.0 || client.height <= 0.0 {
            return None;
        }
        let left = (client.left() / CELL_WIDTH).floor() as i64;
        let top = (client.top() / CELL_HEIGHT).floor() as i64;
        let right = (client.right() / CELL_WIDTH).ceil() as i64;
        let bottom = (client.bottom() / CELL_HEIGHT).ceil() as i64;

        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(i64::from(self.area.width));
        let bottom = bottom.min(i64::from(self.area.height));
        if left >= right || top >= bottom {
            return None;
        }

        Some(Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}
