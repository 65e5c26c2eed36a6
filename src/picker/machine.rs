//! Interaction state machine.
//!
//! `PickerCore` holds the picker's mutable state behind `Rc<RefCell<_>>`.
//! The document listeners installed on arm only keep `Weak` handles to it, so
//! dropping a picker never leaves live references inside the document.
//!
//! State changes are requested by setting [`PickerCore::state`] and then
//! calling [`reconcile`], which acquires or releases the [`ArmedSession`] so
//! the document matches the requested state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::PickerConfig;
use crate::document::{Document, DomEvent, ElementId, Key, Listener};
use crate::error::{PickResult, PickerError};

use super::overlay::OverlaySurface;
use super::selection::{HandlerSlot, SelectionResult};
use super::session::{ArmedSession, SessionListeners};
use super::state::{PickerState, PickerStats};
use super::tracker;

#[derive(Debug)]
pub(crate) struct PickerCore {
    pub(crate) owner: u64,
    pub(crate) state: PickerState,
    pub(crate) config: PickerConfig,
    /// `None` once the picker has been unmounted.
    pub(crate) overlay: Option<OverlaySurface>,
    pub(crate) session: Option<ArmedSession>,
    pub(crate) hovered: Option<ElementId>,
    pub(crate) stats: PickerStats,
}

impl PickerCore {
    pub(crate) fn new(owner: u64, config: PickerConfig, overlay: OverlaySurface) -> Self {
        Self {
            owner,
            state: PickerState::Disarmed,
            config,
            overlay: Some(overlay),
            session: None,
            hovered: None,
            stats: PickerStats::default(),
        }
    }

    /// Request the disarmed state and clean up immediately. Idempotent.
    pub(crate) fn disarm(&mut self, doc: &mut Document) {
        self.state = PickerState::Disarmed;
        self.finish_session(doc);
    }

    fn finish_session(&mut self, doc: &mut Document) {
        self.hovered = None;
        if let Some(session) = self.session.take() {
            tracing::debug!(owner = self.owner, "removing picker listeners");
            session.release(doc);
            self.stats.disarms += 1;
        }
    }
}

/// Bring the document in line with the requested state.
pub(crate) fn reconcile(
    core: &Rc<RefCell<PickerCore>>,
    handler: &Rc<HandlerSlot>,
    doc: &mut Document,
) -> PickResult<()> {
    let (armed, has_session) = {
        let core = core.borrow();
        (core.state.is_armed(), core.session.is_some())
    };
    match (armed, has_session) {
        (true, false) => arm(core, handler, doc),
        (false, true) => {
            core.borrow_mut().finish_session(doc);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn arm(
    core_rc: &Rc<RefCell<PickerCore>>,
    handler: &Rc<HandlerSlot>,
    doc: &mut Document,
) -> PickResult<()> {
    let mut core = core_rc.borrow_mut();
    let Some(overlay) = core.overlay.filter(|overlay| doc.contains(overlay.element())) else {
        core.state = PickerState::Disarmed;
        return Err(PickerError::NotMounted);
    };

    let callbacks = session_listeners(Rc::downgrade(core_rc), Rc::downgrade(handler));
    match ArmedSession::acquire(doc, core.owner, overlay, callbacks) {
        Ok(session) => {
            tracing::debug!(owner = core.owner, "adding picker listeners");
            core.session = Some(session);
            core.hovered = None;
            core.stats.arms += 1;
            Ok(())
        }
        Err(err) => {
            tracing::warn!(owner = core.owner, error = %err, "picker could not arm");
            core.state = PickerState::Disarmed;
            Err(err)
        }
    }
}

fn session_listeners(core: Weak<RefCell<PickerCore>>, handler: Weak<HandlerSlot>) -> SessionListeners {
    let hover_core = core.clone();
    let hover: Listener = Rc::new(move |doc: &mut Document, event: &mut DomEvent| {
        if let Some(core) = hover_core.upgrade() {
            on_hover(&core, doc, event);
        }
    });

    let click_core = core.clone();
    let click: Listener = Rc::new(move |doc: &mut Document, event: &mut DomEvent| {
        if let Some(core) = click_core.upgrade() {
            on_click(&core, &handler, doc, event);
        }
    });

    let key: Listener = Rc::new(move |doc: &mut Document, event: &mut DomEvent| {
        if let Some(core) = core.upgrade() {
            on_key_down(&core, doc, event);
        }
    });

    SessionListeners { hover, click, key }
}

fn on_hover(core: &RefCell<PickerCore>, doc: &mut Document, event: &mut DomEvent) {
    event.prevent_default();
    event.stop_propagation();

    let Ok(mut core) = core.try_borrow_mut() else {
        tracing::warn!("hover ignored: picker state is busy");
        return;
    };
    if !core.state.is_armed() {
        return;
    }
    let (Some(target), Some(overlay)) = (event.target(), core.overlay) else {
        return;
    };
    if target == overlay.element() {
        return;
    }

    core.hovered = Some(target);
    core.stats.highlights += 1;
    tracker::highlight(doc, target, &overlay);
}

fn on_click(
    core_rc: &RefCell<PickerCore>,
    handler: &Weak<HandlerSlot>,
    doc: &mut Document,
    event: &mut DomEvent,
) {
    event.prevent_default();
    event.stop_propagation();

    let selection = {
        let Ok(mut core) = core_rc.try_borrow_mut() else {
            tracing::warn!("click ignored: picker state is busy");
            return;
        };
        if !core.state.is_armed() {
            return;
        }
        let Some(target) = core.hovered.take() else {
            tracing::debug!("click with nothing hovered; staying armed");
            return;
        };
        let Some(selection) = SelectionResult::capture(doc, target) else {
            tracing::debug!("hovered element no longer exists; staying armed");
            return;
        };
        // Disarmed before the handler runs so nothing it dispatches is picked up.
        core.state = PickerState::Disarmed;
        core.stats.selections += 1;
        selection
    };

    tracing::info!(selector = %selection.info.selector(), "element picked");
    match handler.upgrade() {
        Some(handler) => handler.invoke(doc, selection),
        None => tracing::warn!("selection confirmed after the handler slot was dropped"),
    }

    let mut core = core_rc.borrow_mut();
    if !core.state.is_armed() {
        core.finish_session(doc);
    }
}

fn on_key_down(core: &RefCell<PickerCore>, doc: &mut Document, event: &mut DomEvent) {
    if event.key() != Some(Key::Escape) {
        return;
    }
    let Ok(mut core) = core.try_borrow_mut() else {
        tracing::warn!("escape ignored: picker state is busy");
        return;
    };
    if core.state.is_armed() {
        tracing::info!(owner = core.owner, "picker cancelled");
        core.disarm(doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DomRect, ElementSpec, EventKind, Viewport};

    fn fixture() -> (Document, Rc<RefCell<PickerCore>>, Rc<HandlerSlot>, ElementId) {
        let mut doc = Document::new(Viewport::new(400.0, 300.0));
        let body = doc.body();
        let target = doc
            .append(body, ElementSpec::new("p").layout(DomRect::new(10.0, 20.0, 100.0, 50.0)))
            .unwrap();
        let config = PickerConfig::default();
        let overlay = OverlaySurface::create(&mut doc, &config);
        let owner = doc.allocate_owner();
        let core = Rc::new(RefCell::new(PickerCore::new(owner, config, overlay)));
        (doc, core, Rc::new(HandlerSlot::default()), target)
    }

    fn request(core: &Rc<RefCell<PickerCore>>, state: PickerState) {
        core.borrow_mut().state = state;
    }

    #[test]
    fn test_reconcile_arms_and_disarms() {
        let (mut doc, core, handler, _) = fixture();

        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();
        assert!(core.borrow().session.is_some());
        assert_eq!(core.borrow().stats.arms, 1);

        request(&core, PickerState::Disarmed);
        reconcile(&core, &handler, &mut doc).unwrap();
        assert!(core.borrow().session.is_none());
        assert_eq!(core.borrow().stats.disarms, 1);
    }

    #[test]
    fn test_reconcile_is_noop_when_settled() {
        let (mut doc, core, handler, _) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();
        reconcile(&core, &handler, &mut doc).unwrap();
        assert_eq!(core.borrow().stats.arms, 1);
        assert_eq!(doc.listener_count(EventKind::Click), 1);
        core.borrow_mut().disarm(&mut doc);
    }

    #[test]
    fn test_arm_without_overlay_element_is_not_mounted() {
        let (mut doc, core, handler, _) = fixture();
        let overlay = core.borrow().overlay.unwrap();
        doc.remove_element(overlay.element());

        request(&core, PickerState::Armed);
        let err = reconcile(&core, &handler, &mut doc).unwrap_err();
        assert_eq!(err, PickerError::NotMounted);
        assert_eq!(core.borrow().state, PickerState::Disarmed);
    }

    #[test]
    fn test_hover_updates_target_and_overlay() {
        let (mut doc, core, handler, target) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();

        doc.dispatch(DomEvent::mouse_over(target));
        let overlay = core.borrow().overlay.unwrap();
        assert_eq!(core.borrow().hovered, Some(target));
        assert_eq!(
            overlay.placed_box(&doc),
            Some(DomRect::new(10.0, 20.0, 100.0, 50.0))
        );
        core.borrow_mut().disarm(&mut doc);
    }

    #[test]
    fn test_hover_on_overlay_is_ignored() {
        let (mut doc, core, handler, _) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();

        let overlay = core.borrow().overlay.unwrap();
        doc.dispatch(DomEvent::mouse_over(overlay.element()));
        assert_eq!(core.borrow().hovered, None);
        assert_eq!(core.borrow().stats.highlights, 0);
        core.borrow_mut().disarm(&mut doc);
    }

    #[test]
    fn test_escape_disarms_and_clears_hover() {
        let (mut doc, core, handler, target) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();
        doc.dispatch(DomEvent::mouse_over(target));

        doc.key_down(Key::Escape);
        let core = core.borrow();
        assert_eq!(core.state, PickerState::Disarmed);
        assert!(core.session.is_none());
        assert_eq!(core.hovered, None);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let (mut doc, core, handler, _) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();
        doc.key_down(Key::Enter);
        doc.key_down(Key::Char('x'));
        assert!(core.borrow().state.is_armed());
        core.borrow_mut().disarm(&mut doc);
    }

    #[test]
    fn test_disarm_is_idempotent() {
        let (mut doc, core, handler, _) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();

        core.borrow_mut().disarm(&mut doc);
        core.borrow_mut().disarm(&mut doc);
        assert_eq!(core.borrow().stats.disarms, 1);
    }

    #[test]
    fn test_listeners_do_not_keep_core_alive() {
        let (mut doc, core, handler, target) = fixture();
        request(&core, PickerState::Armed);
        reconcile(&core, &handler, &mut doc).unwrap();
        assert_eq!(Rc::strong_count(&core), 1);

        let overlay = core.borrow().overlay.unwrap();
        drop(core);
        let outcome = doc.dispatch(DomEvent::mouse_over(target));
        assert_eq!(outcome.listeners_invoked, 1);
        assert!(!outcome.default_prevented);
        assert_eq!(overlay.placed_box(&doc), None);
    }
}
