//! Application state for the `elpick` demo.
//!
//! The app owns the document, the sample page and the mounted picker.
//! Terminal events are translated into document signals in `handlers`;
//! rendering reads the document back in `crate::ui`.

mod handlers;
pub mod page;
pub mod viewport;

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;

use crate::config::PickerConfig;
use crate::document::{Document, Viewport};
use crate::error::PickResult;
use crate::picker::{ElementInfo, ElementPicker};
use page::{build_sample_page, SamplePage};
use viewport::PageViewport;

/// Main application state.
#[derive(Debug)]
pub struct App {
    pub document: Document,
    pub page: SamplePage,
    /// `None` after shutdown
    pub picker: Option<ElementPicker>,
    /// Confirmed selections, oldest first. Shared with the picker's handler.
    pub selections: Rc<RefCell<Vec<ElementInfo>>>,
    /// Where the page is drawn, updated by every render.
    pub page_viewport: PageViewport,
    /// Where the toggle button is drawn, updated by every render.
    pub toggle_area: Rect,
    /// Last status message (errors, navigations).
    pub status: Option<String>,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    /// Build the sample page and mount a picker on it.
    pub fn new(config: PickerConfig) -> PickResult<Self> {
        let mut document = Document::new(Viewport::new(
            f64::from(page::PAGE_COLUMNS) * page::CELL_WIDTH,
            f64::from(page::PAGE_ROWS) * page::CELL_HEIGHT,
        ));
        let page = build_sample_page(&mut document)?;

        let selections: Rc<RefCell<Vec<ElementInfo>>> = Rc::default();
        let sink = Rc::clone(&selections);
        let picker = ElementPicker::mount(&mut document, config, move |_doc, selection| {
            tracing::info!(
                target_id = ?selection.target,
                info = %serde_json::to_string(&selection.info).unwrap_or_default(),
                "picked element"
            );
            sink.borrow_mut().push(selection.info);
        });

        Ok(Self {
            document,
            page,
            picker: Some(picker),
            selections,
            page_viewport: PageViewport::default(),
            toggle_area: Rect::default(),
            status: None,
            should_quit: false,
            needs_redraw: true,
        })
    }

    pub fn is_armed(&self) -> bool {
        self.picker.as_ref().is_some_and(ElementPicker::is_armed)
    }

    /// Label for the toggle button.
    pub fn toggle_label(&self) -> &str {
        self.picker.as_ref().map_or("", ElementPicker::label)
    }

    /// Press the toggle button.
    pub fn toggle_picker(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match picker.toggle(&mut self.document) {
            Ok(state) => self.status = Some(format!("picker {}", state)),
            Err(err) => {
                tracing::warn!(error = %err, "toggle failed");
                self.status = Some(err.to_string());
            }
        }
        self.needs_redraw = true;
    }

    /// Record where the page is drawn and resize the document to match.
    pub fn set_page_area(&mut self, area: Rect) {
        if self.page_viewport.area == area {
            return;
        }
        self.page_viewport = PageViewport::new(area);
        self.document.set_viewport(self.page_viewport.document_viewport());
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Unmount the picker and hand back every confirmed selection.
    pub fn shutdown(&mut self) -> Vec<ElementInfo> {
        if let Some(picker) = self.picker.take() {
            picker.unmount(&mut self.document);
        }
        self.selections.borrow_mut().drain(..).collect()
    }
}
