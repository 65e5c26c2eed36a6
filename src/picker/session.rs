//! One armed session: everything acquired on arm and released on disarm.
//!
//! Acquisition claims the document, snapshots the body style, attaches the
//! overlay, applies the picking overrides and registers the three document
//! listeners. [`ArmedSession::release`] undoes all of it in one place, so
//! every exit path (confirm, escape, re-toggle, unmount) runs the same
//! cleanup.

use crate::document::{
    Document, EventKind, EventTarget, ListenPhase, Listener, ListenerId,
};
use crate::error::PickResult;

use super::overlay::OverlaySurface;
use super::side_effects::{self, SavedDocumentStyle};

/// Listener callbacks installed for the lifetime of a session.
pub(crate) struct SessionListeners {
    pub(crate) hover: Listener,
    pub(crate) click: Listener,
    pub(crate) key: Listener,
}

#[derive(Debug)]
pub(crate) struct ArmedSession {
    owner: u64,
    overlay: OverlaySurface,
    saved: Option<SavedDocumentStyle>,
    listeners: Vec<ListenerId>,
    released: bool,
}

impl ArmedSession {
    /// Arm `doc` for `owner`.
    ///
    /// Fails without touching the document when another picker holds it.
    pub(crate) fn acquire(
        doc: &mut Document,
        owner: u64,
        overlay: OverlaySurface,
        callbacks: SessionListeners,
    ) -> PickResult<Self> {
        doc.claim_picking(owner)?;

        let saved = SavedDocumentStyle::capture(doc);
        overlay.attach(doc);
        side_effects::suspend(doc);

        let listeners = vec![
            doc.add_listener(
                EventTarget::Document,
                EventKind::MouseOver,
                ListenPhase::Capture,
                callbacks.hover,
            ),
            doc.add_listener(
                EventTarget::Document,
                EventKind::Click,
                ListenPhase::Capture,
                callbacks.click,
            ),
            doc.add_listener(
                EventTarget::Document,
                EventKind::KeyDown,
                ListenPhase::Bubble,
                callbacks.key,
            ),
        ];

        Ok(Self {
            owner,
            overlay,
            saved: Some(saved),
            listeners,
            released: false,
        })
    }

    pub(crate) fn listener_ids(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Armed-exit cleanup.
    pub(crate) fn release(mut self, doc: &mut Document) {
        self.overlay.detach(doc);
        side_effects::restore(self.saved.take(), doc);
        for id in self.listeners.drain(..) {
            doc.remove_listener(id);
        }
        doc.release_picking(self.owner);
        self.released = true;
    }
}

impl Drop for ArmedSession {
    fn drop(&mut self) {
        if !self.released {
            tracing::warn!(
                owner = self.owner,
                listeners = self.listeners.len(),
                "armed session dropped without release; document left in picking mode"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::config::PickerConfig;
    use crate::document::{Cursor, DomEvent, Overflow, Viewport};
    use crate::error::PickerError;

    fn noop_listeners() -> SessionListeners {
        let noop = || -> Listener { Rc::new(|_: &mut Document, _: &mut DomEvent| {}) };
        SessionListeners {
            hover: noop(),
            click: noop(),
            key: noop(),
        }
    }

    fn setup() -> (Document, OverlaySurface, u64) {
        let mut doc = Document::new(Viewport::new(200.0, 100.0));
        let overlay = OverlaySurface::create(&mut doc, &PickerConfig::default());
        let owner = doc.allocate_owner();
        (doc, overlay, owner)
    }

    #[test]
    fn test_acquire_applies_everything() {
        let (mut doc, overlay, owner) = setup();
        let session = ArmedSession::acquire(&mut doc, owner, overlay, noop_listeners()).unwrap();

        assert!(overlay.is_attached(&doc));
        assert_eq!(doc.body_style().cursor, Cursor::Crosshair);
        assert_eq!(doc.body_style().overflow, Some(Overflow::Hidden));
        assert_eq!(doc.picking_owner(), Some(owner));
        assert_eq!(session.listener_ids().len(), 3);
        assert_eq!(doc.listener_count(EventKind::MouseOver), 1);
        assert_eq!(doc.listener_count(EventKind::Click), 1);
        assert_eq!(doc.listener_count(EventKind::KeyDown), 1);

        session.release(&mut doc);
    }

    #[test]
    fn test_release_undoes_everything() {
        let (mut doc, overlay, owner) = setup();
        doc.body_style_mut().overflow = Some(Overflow::Auto);

        let session = ArmedSession::acquire(&mut doc, owner, overlay, noop_listeners()).unwrap();
        session.release(&mut doc);

        assert!(!overlay.is_attached(&doc));
        assert!(doc.contains(overlay.element()));
        assert_eq!(doc.body_style().overflow, Some(Overflow::Auto));
        assert_eq!(doc.body_style().cursor, Cursor::Default);
        assert_eq!(doc.picking_owner(), None);
        assert_eq!(doc.listener_count(EventKind::MouseOver), 0);
        assert_eq!(doc.listener_count(EventKind::Click), 0);
        assert_eq!(doc.listener_count(EventKind::KeyDown), 0);
    }

    #[test]
    fn test_busy_document_is_left_untouched() {
        let (mut doc, overlay, owner) = setup();
        let other = doc.allocate_owner();
        doc.claim_picking(other).unwrap();

        let err = ArmedSession::acquire(&mut doc, owner, overlay, noop_listeners()).unwrap_err();
        assert_eq!(err, PickerError::DocumentBusy { owner: other });
        assert!(!overlay.is_attached(&doc));
        assert_eq!(doc.body_style().cursor, Cursor::Default);
        assert_eq!(doc.listener_count(EventKind::Click), 0);
    }

    #[test]
    fn test_listeners_wired_to_document_phases() {
        let (mut doc, overlay, owner) = setup();
        let hits = Rc::new(Cell::new(0));
        let counter = |hits: Rc<Cell<u32>>| -> Listener {
            Rc::new(move |_: &mut Document, _: &mut DomEvent| hits.set(hits.get() + 1))
        };
        let callbacks = SessionListeners {
            hover: counter(Rc::clone(&hits)),
            click: counter(Rc::clone(&hits)),
            key: counter(Rc::clone(&hits)),
        };
        let session = ArmedSession::acquire(&mut doc, owner, overlay, callbacks).unwrap();

        let body = doc.body();
        doc.dispatch(DomEvent::mouse_over(body));
        doc.dispatch(DomEvent::click(body));
        doc.dispatch(DomEvent::key_down(crate::document::Key::Escape));
        assert_eq!(hits.get(), 3);

        session.release(&mut doc);
        doc.dispatch(DomEvent::click(body));
        assert_eq!(hits.get(), 3);
    }
}
