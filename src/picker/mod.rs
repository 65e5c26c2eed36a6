//! The element picker widget.
//!
//! An [`ElementPicker`] is mounted into a [`Document`] with a
//! [`PickerConfig`] and a selection handler. Toggling it arms the document:
//! hovering moves a highlight overlay over the element under the pointer,
//! clicking confirms that element and hands a [`SelectionResult`] to the
//! handler, and Escape cancels. Every exit path restores the document's
//! scroll mode and cursor and removes the picker's listeners.
//!
//! ```
//! use elpick::config::PickerConfig;
//! use elpick::document::{Document, DomRect, ElementSpec, Point, Viewport};
//! use elpick::picker::ElementPicker;
//!
//! let mut doc = Document::new(Viewport::new(800.0, 600.0));
//! let body = doc.body();
//! doc.append(body, ElementSpec::new("button").id("save").layout(DomRect::new(10.0, 10.0, 80.0, 20.0)))
//!     .unwrap();
//!
//! let mut picker = ElementPicker::mount(&mut doc, PickerConfig::default(), |_doc, selection| {
//!     assert_eq!(selection.info.selector(), "button#save");
//! });
//! picker.toggle(&mut doc).unwrap();
//! doc.pointer_move(Point::new(20.0, 15.0));
//! doc.click_at(Point::new(20.0, 15.0));
//! assert!(!picker.is_armed());
//! picker.unmount(&mut doc);
//! ```

mod activation;
mod machine;
mod overlay;
mod selection;
mod session;
mod side_effects;
mod state;
mod tracker;

use std::cell::RefCell;
use std::rc::Rc;

pub use activation::{ActivationControl, DEFAULT_ARMED_LABEL, DEFAULT_IDLE_LABEL};
pub use overlay::{overlay_style, OverlaySurface, OVERLAY_TRANSITION};
pub use selection::{ElementInfo, SelectHandler, SelectionResult};
pub use side_effects::SavedDocumentStyle;
pub use state::{PickerState, PickerStats};
pub use tracker::highlight;

use crate::config::PickerConfig;
use crate::document::{Document, ElementId};
use crate::error::PickResult;

use machine::{reconcile, PickerCore};
use selection::HandlerSlot;

/// A mounted element picker.
///
/// Must be released with [`ElementPicker::unmount`]. `Drop` has no access
/// to the document, so dropping a mounted picker leaves its overlay element
/// behind. If it was armed, the body also stays scroll-locked with a
/// crosshair cursor, its listeners stay registered (inert), and the
/// document's picking claim is never released, so any other picker on the
/// same document gets [`PickerError::DocumentBusy`](crate::error::PickerError::DocumentBusy).
#[derive(Debug)]
pub struct ElementPicker {
    core: Rc<RefCell<PickerCore>>,
    handler: Rc<HandlerSlot>,
    activation: ActivationControl,
}

impl ElementPicker {
    /// Mount a picker: the overlay element is created (detached) and the
    /// picker starts disarmed.
    pub fn mount<F>(doc: &mut Document, config: PickerConfig, on_select: F) -> Self
    where
        F: FnMut(&mut Document, SelectionResult) + 'static,
    {
        let owner = doc.allocate_owner();
        let overlay = OverlaySurface::create(doc, &config);
        tracing::debug!(owner, overlay = ?overlay.element(), "picker mounted");
        Self {
            core: Rc::new(RefCell::new(PickerCore::new(owner, config, overlay))),
            handler: Rc::new(HandlerSlot::new(Box::new(on_select))),
            activation: ActivationControl::default(),
        }
    }

    /// Use custom toggle labels.
    pub fn with_activation(mut self, activation: ActivationControl) -> Self {
        self.activation = activation;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> PickerState {
        self.core.borrow().state
    }

    pub fn is_armed(&self) -> bool {
        self.state().is_armed()
    }

    /// Element currently under the pointer, while armed.
    pub fn hovered(&self) -> Option<ElementId> {
        self.core.borrow().hovered
    }

    pub fn config(&self) -> PickerConfig {
        self.core.borrow().config.clone()
    }

    /// The overlay element, until the picker is unmounted.
    pub fn overlay(&self) -> Option<ElementId> {
        self.core.borrow().overlay.map(|overlay| overlay.element())
    }

    pub fn stats(&self) -> PickerStats {
        self.core.borrow().stats
    }

    /// Toggle label for the current state.
    pub fn label(&self) -> &str {
        self.activation.label(self.state())
    }

    pub fn activation(&self) -> &ActivationControl {
        &self.activation
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Press the activation toggle and return the resulting state.
    ///
    /// Fails with [`PickerError::DocumentBusy`](crate::error::PickerError)
    /// if another picker is armed on the same document; the picker then
    /// stays disarmed.
    pub fn toggle(&mut self, doc: &mut Document) -> PickResult<PickerState> {
        let next = self.activation.press(self.state());
        tracing::info!(state = %next, "picker toggled");
        self.core.borrow_mut().state = next;
        reconcile(&self.core, &self.handler, doc)?;
        Ok(self.state())
    }

    /// Arm unless already armed.
    pub fn arm(&mut self, doc: &mut Document) -> PickResult<()> {
        if self.is_armed() {
            return Ok(());
        }
        self.core.borrow_mut().state = PickerState::Armed;
        reconcile(&self.core, &self.handler, doc)
    }

    /// Cancel picking without reporting a selection. No-op while disarmed.
    pub fn disarm(&mut self, doc: &mut Document) {
        self.core.borrow_mut().disarm(doc);
    }

    /// Replace the configuration. The overlay is restyled in place, so an
    /// armed picker keeps its state and its current highlight box.
    pub fn set_config(&mut self, doc: &mut Document, config: PickerConfig) {
        let mut core = self.core.borrow_mut();
        if let Some(overlay) = core.overlay {
            overlay.restyle(doc, &config);
        }
        tracing::debug!(armed = core.state.is_armed(), "picker restyled");
        core.config = config;
    }

    /// Replace the selection handler. Takes effect for a pending selection.
    pub fn set_on_select<F>(&mut self, on_select: F)
    where
        F: FnMut(&mut Document, SelectionResult) + 'static,
    {
        self.handler.replace(Box::new(on_select));
    }

    /// Disarm if needed and remove the overlay element from the document.
    pub fn unmount(self, doc: &mut Document) {
        let mut core = self.core.borrow_mut();
        core.disarm(doc);
        if let Some(overlay) = core.overlay.take() {
            overlay.destroy(doc);
        }
        tracing::debug!(owner = core.owner, "picker unmounted");
    }
}

impl Drop for ElementPicker {
    fn drop(&mut self) {
        let Ok(core) = self.core.try_borrow() else {
            return;
        };
        if core.overlay.is_some() {
            tracing::warn!(owner = core.owner, "picker dropped without unmount");
        }
    }
}
