//! The overlay surface: one element that visually tracks the hovered target.
//!
//! Created once when a picker mounts and reused across every arm cycle. It
//! never takes part in hit testing (`pointer-events: none`), so hover and
//! click detection reach whatever is painted underneath.

use crate::config::PickerConfig;
use crate::document::{
    Border, Document, DomRect, ElementId, ElementStyle, PointerEvents, Position,
};

/// Transition applied to overlay moves.
pub const OVERLAY_TRANSITION: &str = "all 0.2s ease-in-out";

/// Build the overlay's inline style from `config`, keeping `current_box`.
pub fn overlay_style(config: &PickerConfig, current_box: Option<DomRect>) -> ElementStyle {
    let mut style = ElementStyle {
        position: Position::Absolute,
        pointer_events: PointerEvents::None,
        background: Some(config.highlight_color.clone()),
        border: Some(Border {
            width: config.border_width,
            color: config.outline_color.clone(),
        }),
        z_index: Some(config.stacking_order),
        transition: Some(OVERLAY_TRANSITION.to_string()),
        ..Default::default()
    };
    if let Some(rect) = current_box {
        style.set_box(rect);
    }
    style
}

/// Handle to a picker's overlay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySurface {
    element: ElementId,
}

impl OverlaySurface {
    /// Create the (detached) overlay element.
    pub fn create(doc: &mut Document, config: &PickerConfig) -> Self {
        let element = doc.create_element("div");
        let surface = Self { element };
        surface.restyle(doc, config);
        surface
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Re-derive the style from `config`. The current position is kept so a
    /// restyle mid-pick does not move the overlay.
    pub fn restyle(&self, doc: &mut Document, config: &PickerConfig) -> bool {
        let Some(el) = doc.get_mut(self.element) else {
            return false;
        };
        let current_box = el.style().placed_box();
        *el.style_mut() = overlay_style(config, current_box);
        true
    }

    /// Move the overlay to `rect` (page coordinates).
    pub fn place(&self, doc: &mut Document, rect: DomRect) -> bool {
        match doc.get_mut(self.element) {
            Some(el) => {
                el.style_mut().set_box(rect);
                true
            }
            None => false,
        }
    }

    /// Current box, once the overlay has been placed.
    pub fn placed_box(&self, doc: &Document) -> Option<DomRect> {
        doc.get(self.element)?.style().placed_box()
    }

    pub fn is_attached(&self, doc: &Document) -> bool {
        doc.is_connected(self.element)
    }

    /// Insert into the body unless it is already in the tree.
    pub fn attach(&self, doc: &mut Document) -> bool {
        match doc.get(self.element) {
            Some(el) if el.parent().is_none() => {}
            _ => return false,
        }
        let body = doc.body();
        doc.append_child(body, self.element).is_ok()
    }

    /// Take the overlay out of the tree; it stays available for re-attachment.
    pub fn detach(&self, doc: &mut Document) -> bool {
        doc.remove_child(self.element)
    }

    /// Remove the overlay element from the document for good.
    pub fn destroy(self, doc: &mut Document) -> bool {
        doc.remove_element(self.element)
    }
}
