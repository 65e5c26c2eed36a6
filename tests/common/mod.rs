//! Common fixtures for picker integration tests.
//!
//! ```ignore
//! mod common;
//! use common::PickerHarness;
//!
//! let mut h = PickerHarness::new();
//! h.toggle();
//! h.hover(h.a);
//! h.click(h.a);
//! assert_eq!(h.picked_selectors(), vec!["div#a.box"]);
//! ```

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use elpick::config::PickerConfig;
use elpick::document::{
    Document, DomEvent, DomRect, ElementId, ElementSpec, EventKind, EventTarget, ListenPhase,
    Listener, Point, Viewport,
};
use elpick::picker::{ElementPicker, PickerState, SelectionResult};

pub const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

/// Box of element A in the reference scenario.
pub const RECT_A: DomRect = DomRect::new(10.0, 20.0, 100.0, 50.0);
/// Box of element B in the reference scenario.
pub const RECT_B: DomRect = DomRect::new(0.0, 0.0, 200.0, 20.0);

/// Selections recorded by the harness handler.
pub type Picks = Rc<RefCell<Vec<SelectionResult>>>;

/// A document with a few elements and a mounted picker.
pub struct PickerHarness {
    pub doc: Document,
    pub picker: Option<ElementPicker>,
    pub picks: Picks,
    /// `div#a.box`, 100×50 at (10, 20)
    pub a: ElementId,
    /// `span#b`, 200×20 at (0, 0)
    pub b: ElementId,
    /// `a#home.nav` linking to `/home`, with a child `span.label`
    pub link: ElementId,
    pub link_label: ElementId,
    /// `button#save` with its own click listener
    pub button: ElementId,
    pub button_clicks: Rc<Cell<u32>>,
}

impl PickerHarness {
    pub fn new() -> Self {
        Self::with_config(PickerConfig::default())
    }

    pub fn with_config(config: PickerConfig) -> Self {
        let mut doc = Document::new(VIEWPORT);
        let body = doc.body();
        // Taller than the viewport so the page can scroll.
        if let Some(el) = doc.get_mut(body) {
            el.set_layout(DomRect::new(0.0, 0.0, 800.0, 1200.0));
        }

        let a = doc
            .append(body, ElementSpec::new("div").id("a").class("box").layout(RECT_A))
            .unwrap();
        let b = doc
            .append(body, ElementSpec::new("span").id("b").layout(RECT_B))
            .unwrap();
        let link = doc
            .append(
                body,
                ElementSpec::new("a")
                    .id("home")
                    .class("nav")
                    .href("/home")
                    .layout(DomRect::new(300.0, 100.0, 80.0, 20.0)),
            )
            .unwrap();
        let link_label = doc
            .append(
                link,
                ElementSpec::new("span")
                    .class("label")
                    .text("Home")
                    .layout(DomRect::new(305.0, 102.0, 40.0, 16.0)),
            )
            .unwrap();
        let button = doc
            .append(
                body,
                ElementSpec::new("button")
                    .id("save")
                    .classes(["btn", "primary"])
                    .layout(DomRect::new(300.0, 900.0, 120.0, 30.0)),
            )
            .unwrap();

        let button_clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&button_clicks);
        let on_click: Listener = Rc::new(move |_: &mut Document, _: &mut DomEvent| {
            counter.set(counter.get() + 1);
        });
        doc.add_listener(EventTarget::Element(button), EventKind::Click, ListenPhase::Bubble, on_click);

        let picks: Picks = Rc::default();
        let sink = Rc::clone(&picks);
        let picker = ElementPicker::mount(&mut doc, config, move |_doc, selection| {
            sink.borrow_mut().push(selection);
        });

        Self {
            doc,
            picker: Some(picker),
            picks,
            a,
            b,
            link,
            link_label,
            button,
            button_clicks,
        }
    }

    pub fn picker(&self) -> &ElementPicker {
        self.picker.as_ref().expect("picker unmounted")
    }

    pub fn picker_mut(&mut self) -> &mut ElementPicker {
        self.picker.as_mut().expect("picker unmounted")
    }

    pub fn toggle(&mut self) -> PickerState {
        let picker = self.picker.as_mut().expect("picker unmounted");
        picker.toggle(&mut self.doc).expect("toggle failed")
    }

    pub fn unmount(&mut self) {
        if let Some(picker) = self.picker.take() {
            picker.unmount(&mut self.doc);
        }
    }

    /// Client point at the centre of `id`.
    pub fn center(&self, id: ElementId) -> Point {
        let rect = self.doc.bounding_client_rect(id).expect("unknown element");
        Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    /// Move the pointer onto `id`.
    pub fn hover(&mut self, id: ElementId) {
        let point = self.center(id);
        self.doc.pointer_move(point);
    }

    /// Click at the centre of `id`.
    pub fn click(&mut self, id: ElementId) -> elpick::document::DispatchOutcome {
        let point = self.center(id);
        self.doc.click_at(point)
    }

    pub fn overlay(&self) -> ElementId {
        self.picker().overlay().expect("overlay destroyed")
    }

    pub fn overlay_attached(&self) -> bool {
        self.doc.is_connected(self.overlay())
    }

    pub fn overlay_box(&self) -> Option<DomRect> {
        self.doc.get(self.overlay())?.style().placed_box()
    }

    pub fn picked_selectors(&self) -> Vec<String> {
        self.picks
            .borrow()
            .iter()
            .map(|pick| pick.info.selector())
            .collect()
    }

    /// Number of picker listeners currently registered on the document.
    pub fn listener_counts(&self) -> (usize, usize, usize) {
        (
            self.doc.listener_count(EventKind::MouseOver),
            // minus the button's own listener
            self.doc.listener_count(EventKind::Click) - 1,
            self.doc.listener_count(EventKind::KeyDown),
        )
    }
}

impl Drop for PickerHarness {
    fn drop(&mut self) {
        self.unmount();
    }
}
