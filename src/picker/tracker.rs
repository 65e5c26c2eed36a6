//! Highlight tracker: moves the overlay onto a hovered target.

use crate::document::{Document, DomRect, ElementId};

use super::overlay::OverlaySurface;

/// Position `overlay` over `target`.
///
/// The target's viewport box is shifted by the current scroll offset so the
/// overlay lands on the target in page coordinates. Zero-sized targets are
/// placed like any other. Returns the placed box, or `None` when either
/// element no longer exists.
pub fn highlight(doc: &mut Document, target: ElementId, overlay: &OverlaySurface) -> Option<DomRect> {
    let client = doc.bounding_client_rect(target)?;
    let scroll = doc.scroll();
    let placed = client.translate(scroll.x, scroll.y);
    overlay.place(doc, placed).then_some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::document::{ElementSpec, Viewport};

    #[test]
    fn test_overlay_matches_target_box() {
        let mut doc = Document::new(Viewport::new(300.0, 100.0));
        let body = doc.body();
        let target = doc
            .append(body, ElementSpec::new("div").layout(DomRect::new(10.0, 20.0, 100.0, 50.0)))
            .unwrap();
        let overlay = OverlaySurface::create(&mut doc, &PickerConfig::default());

        let placed = highlight(&mut doc, target, &overlay);
        assert_eq!(placed, Some(DomRect::new(10.0, 20.0, 100.0, 50.0)));
        assert_eq!(overlay.placed_box(&doc), placed);
    }

    #[test]
    fn test_scrolled_target_lands_in_page_space() {
        let mut doc = Document::new(Viewport::new(300.0, 100.0));
        let body = doc.body();
        let target = doc
            .append(body, ElementSpec::new("div").layout(DomRect::new(0.0, 150.0, 50.0, 10.0)))
            .unwrap();
        doc.scroll_by(0.0, 60.0);
        let overlay = OverlaySurface::create(&mut doc, &PickerConfig::default());

        assert_eq!(
            highlight(&mut doc, target, &overlay),
            Some(DomRect::new(0.0, 150.0, 50.0, 10.0))
        );
    }

    #[test]
    fn test_zero_sized_target_is_valid() {
        let mut doc = Document::new(Viewport::new(300.0, 100.0));
        let body = doc.body();
        let empty = doc
            .append(body, ElementSpec::new("span").layout(DomRect::new(5.0, 5.0, 0.0, 0.0)))
            .unwrap();
        let overlay = OverlaySurface::create(&mut doc, &PickerConfig::default());

        assert_eq!(
            highlight(&mut doc, empty, &overlay),
            Some(DomRect::new(5.0, 5.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_missing_target_leaves_overlay_alone() {
        let mut doc = Document::new(Viewport::new(300.0, 100.0));
        let body = doc.body();
        let gone = doc.append(body, ElementSpec::new("p")).unwrap();
        doc.remove_element(gone);
        let overlay = OverlaySurface::create(&mut doc, &PickerConfig::default());

        assert_eq!(highlight(&mut doc, gone, &overlay), None);
        assert_eq!(overlay.placed_box(&doc), None);
    }
}
