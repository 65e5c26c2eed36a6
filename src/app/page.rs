//! The sample page the demo mounts the picker into.
//!
//! Element boxes are laid out on a character grid and stored in CSS pixels,
//! one cell being [`CELL_WIDTH`] × [`CELL_HEIGHT`] pixels. The page carries
//! links and a button with its own click listener so it is visible that the
//! picker suppresses them while armed.

use std::cell::Cell;
use std::rc::Rc;

use crate::document::{
    Document, DomEvent, DomRect, ElementId, ElementSpec, EventKind, EventTarget, ListenPhase,
    Listener,
};
use crate::error::PickResult;

/// Width of one terminal cell in document pixels.
pub const CELL_WIDTH: f64 = 8.0;
/// Height of one terminal cell in document pixels.
pub const CELL_HEIGHT: f64 = 16.0;

/// Page width in cells.
pub const PAGE_COLUMNS: u16 = 76;
/// Page height in cells.
pub const PAGE_ROWS: u16 = 37;

/// A box on the cell grid, in pixels.
pub fn cells(col: u16, row: u16, width: u16, height: u16) -> DomRect {
    DomRect::new(
        f64::from(col) * CELL_WIDTH,
        f64::from(row) * CELL_HEIGHT,
        f64::from(width) * CELL_WIDTH,
        f64::from(height) * CELL_HEIGHT,
    )
}

/// Handles the demo keeps after building the page.
#[derive(Debug, Clone)]
pub struct SamplePage {
    pub header: ElementId,
    pub main: ElementId,
    pub footer: ElementId,
    pub call_to_action: ElementId,
    /// Clicks the page's own button listener has seen.
    pub button_clicks: Rc<Cell<u32>>,
}

fn leaf(tag: &str, rect: DomRect, text: &str) -> ElementSpec {
    ElementSpec::new(tag).layout(rect).text(text)
}

/// Populate `doc` with a header, three content sections and a footer.
pub fn build_sample_page(doc: &mut Document) -> PickResult<SamplePage> {
    let body = doc.body();
    if let Some(el) = doc.get_mut(body) {
        el.set_layout(cells(0, 0, PAGE_COLUMNS, PAGE_ROWS));
    }

    // Header
    let header = doc.append(
        body,
        ElementSpec::new("header")
            .id("top")
            .class("site-header")
            .layout(cells(0, 0, PAGE_COLUMNS, 3)),
    )?;
    doc.append(header, leaf("h1", cells(2, 1, 20, 1), "elpick demo").class("logo"))?;
    let nav = doc.append(
        header,
        ElementSpec::new("nav").class("nav").layout(cells(40, 1, 34, 1)),
    )?;
    for (i, (id, label, href)) in [("home", "Home", "/"), ("docs", "Docs", "/docs"), ("about", "About", "/about")]
        .into_iter()
        .enumerate()
    {
        let mut spec = leaf("a", cells(40 + 11 * i as u16, 1, 8, 1), label)
            .id(id)
            .class("nav-link")
            .href(href);
        if i == 0 {
            spec = spec.class("active");
        }
        doc.append(nav, spec)?;
    }

    // Main content
    let main = doc.append(
        body,
        ElementSpec::new("main").id("content").layout(cells(0, 3, PAGE_COLUMNS, 31)),
    )?;

    let intro = doc.append(
        main,
        ElementSpec::new("section")
            .id("intro")
            .class("card")
            .layout(cells(2, 4, 72, 8)),
    )?;
    doc.append(intro, leaf("h2", cells(4, 5, 40, 1), "Hover anything").class("card-title"))?;
    doc.append(
        intro,
        leaf(
            "p",
            cells(4, 7, 66, 2),
            "Press Pick (or p), move the mouse over the page and click to select an element. Esc cancels.",
        )
        .class("lead"),
    )?;
    let call_to_action = doc.append(
        intro,
        leaf("button", cells(4, 10, 14, 1), "Click me")
            .id("cta")
            .classes(["btn", "btn-primary"]),
    )?;

    let features = doc.append(
        main,
        ElementSpec::new("section")
            .id("features")
            .class("card")
            .layout(cells(2, 13, 72, 10)),
    )?;
    doc.append(features, leaf("h2", cells(4, 14, 20, 1), "Features").class("card-title"))?;
    let list = doc.append(
        features,
        ElementSpec::new("ul").class("feature-list").layout(cells(4, 16, 60, 4)),
    )?;
    for (i, text) in ["Live highlight overlay", "Click to confirm", "Escape to cancel"]
        .into_iter()
        .enumerate()
    {
        doc.append(list, leaf("li", cells(6, 16 + i as u16, 40, 1), text).class("feature"))?;
    }
    doc.append(
        features,
        leaf("a", cells(4, 21, 12, 1), "Read more")
            .class("more-link")
            .href("/features"),
    )?;

    let details = doc.append(
        main,
        ElementSpec::new("section")
            .id("details")
            .class("card")
            .layout(cells(2, 24, 72, 9)),
    )?;
    doc.append(details, leaf("h2", cells(4, 25, 20, 1), "Details").class("card-title"))?;
    doc.append(
        details,
        leaf(
            "p",
            cells(4, 27, 66, 2),
            "Scrolling is locked and the cursor becomes a crosshair while the picker is armed.",
        ),
    )?;
    doc.append(
        details,
        leaf(
            "p",
            cells(4, 30, 66, 2),
            "Both are restored when it disarms, whichever way that happens.",
        )
        .class("note"),
    )?;

    // Footer
    let footer = doc.append(
        body,
        ElementSpec::new("footer")
            .id("bottom")
            .class("site-footer")
            .layout(cells(0, 34, PAGE_COLUMNS, 3)),
    )?;
    doc.append(footer, leaf("p", cells(2, 35, 40, 1), "Built with ratatui").class("copyright"))?;

    let button_clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&button_clicks);
    let on_button_click: Listener = Rc::new(move |_: &mut Document, _: &mut DomEvent| {
        counter.set(counter.get() + 1);
        tracing::debug!(clicks = counter.get(), "page button clicked");
    });
    doc.add_listener(
        EventTarget::Element(call_to_action),
        EventKind::Click,
        ListenPhase::Bubble,
        on_button_click,
    );

    Ok(SamplePage {
        header,
        main,
        footer,
        call_to_action,
        button_clicks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Point, Viewport};

    fn page() -> (Document, SamplePage) {
        let mut doc = Document::new(Viewport::new(
            f64::from(PAGE_COLUMNS) * CELL_WIDTH,
            20.0 * CELL_HEIGHT,
        ));
        let page = build_sample_page(&mut doc).unwrap();
        (doc, page)
    }

    #[test]
    fn test_cells_scale() {
        assert_eq!(cells(1, 2, 3, 4), DomRect::new(8.0, 32.0, 24.0, 64.0));
    }

    #[test]
    fn test_page_structure() {
        let (doc, page) = page();
        let body = doc.body();
        assert_eq!(
            doc.get(body).unwrap().children(),
            &[page.header, page.main, page.footer]
        );
        assert_eq!(doc.get(page.call_to_action).unwrap().id(), "cta");
    }

    #[test]
    fn test_nav_link_is_hit() {
        let (doc, _) = page();
        let hit = doc.element_at(Point::new(40.0 * CELL_WIDTH + 4.0, CELL_HEIGHT + 4.0)).unwrap();
        let el = doc.get(hit).unwrap();
        assert_eq!(el.id(), "home");
        assert!(el.has_class("active"));
    }

    #[test]
    fn test_button_listener_counts_clicks() {
        let (mut doc, page) = page();
        doc.click_at(Point::new(5.0 * CELL_WIDTH, 10.0 * CELL_HEIGHT + 2.0));
        assert_eq!(page.button_clicks.get(), 1);
    }

    #[test]
    fn test_page_taller_than_viewport_scrolls() {
        let (mut doc, _) = page();
        assert!(doc.scroll_by(0.0, 5.0 * CELL_HEIGHT));
        assert_eq!(doc.scroll().y, 5.0 * CELL_HEIGHT);
    }
}
