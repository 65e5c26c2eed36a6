//! Event signals and the listener registry.
//!
//! Listeners are registered on the document itself or on an element, for the
//! capture or bubble phase, mirroring DOM `addEventListener`. Each
//! registration gets a [`ListenerId`] that is the only way to remove it.

use std::fmt;
use std::rc::Rc;

use super::element::ElementId;
use super::geometry::Point;
use super::Document;

/// Kind of signal dispatched through the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The pointer entered a new element.
    MouseOver,
    /// Primary button click.
    Click,
    KeyDown,
}

/// Keys the document distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Char(char),
    Other,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Document,
    Element(ElementId),
}

/// Phase a listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenPhase {
    /// Runs on the way down, before the target's own listeners.
    Capture,
    Bubble,
}

/// A signal in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    kind: EventKind,
    target: Option<ElementId>,
    key: Option<Key>,
    client: Option<Point>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn mouse_over(target: ElementId) -> Self {
        Self::pointer(EventKind::MouseOver, target, None)
    }

    pub fn click(target: ElementId) -> Self {
        Self::pointer(EventKind::Click, target, None)
    }

    pub(super) fn pointer(kind: EventKind, target: ElementId, client: Option<Point>) -> Self {
        Self {
            kind,
            target: Some(target),
            key: None,
            client,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn key_down(key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target: None,
            key: Some(key),
            client: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> Option<ElementId> {
        self.target
    }

    pub fn key(&self) -> Option<Key> {
        self.key
    }

    /// Pointer position in client coordinates, when the host supplied one.
    pub fn client(&self) -> Option<Point> {
        self.client
    }

    /// Cancel the default action (e.g. link navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching listeners on further targets.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Listener callback. Receives the document so it can mutate it mid-dispatch.
pub type Listener = Rc<dyn Fn(&mut Document, &mut DomEvent)>;

/// Handle returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

struct Registration {
    id: ListenerId,
    target: EventTarget,
    kind: EventKind,
    phase: ListenPhase,
    listener: Listener,
}

/// Listeners in registration order.
#[derive(Default)]
pub(super) struct ListenerRegistry {
    entries: Vec<Registration>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(super) fn add(
        &mut self,
        target: EventTarget,
        kind: EventKind,
        phase: ListenPhase,
        listener: Listener,
    ) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Registration {
            id,
            target,
            kind,
            phase,
            listener,
        });
        id
    }

    pub(super) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Drop every listener attached to `element`.
    pub(super) fn remove_target(&mut self, element: ElementId) {
        self.entries
            .retain(|entry| entry.target != EventTarget::Element(element));
    }

    pub(super) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub(super) fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    /// Snapshot of the listeners that match, so dispatch can hand out
    /// `&mut Document` while iterating.
    pub(super) fn matching(
        &self,
        target: EventTarget,
        kind: EventKind,
        phase: Option<ListenPhase>,
    ) -> Vec<(ListenerId, Listener)> {
        self.entries
            .iter()
            .filter(|entry| {
                entry.target == target
                    && entry.kind == kind
                    && phase.map_or(true, |phase| entry.phase == phase)
            })
            .map(|entry| (entry.id, Rc::clone(&entry.listener)))
            .collect()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// What happened while dispatching one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchOutcome {
    pub target: Option<ElementId>,
    pub default_prevented: bool,
    /// Number of listeners that actually ran.
    pub listeners_invoked: usize,
    /// Link followed by the default click action, if any.
    pub navigated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener {
        Rc::new(|_: &mut Document, _: &mut DomEvent| {})
    }

    #[test]
    fn test_registry_assigns_unique_ids() {
        let mut registry = ListenerRegistry::default();
        let a = registry.add(EventTarget::Document, EventKind::Click, ListenPhase::Capture, noop());
        let b = registry.add(EventTarget::Document, EventKind::Click, ListenPhase::Capture, noop());
        assert_ne!(a, b);
        assert_eq!(registry.count(EventKind::Click), 2);
    }

    #[test]
    fn test_registry_remove_is_idempotent() {
        let mut registry = ListenerRegistry::default();
        let id = registry.add(EventTarget::Document, EventKind::KeyDown, ListenPhase::Bubble, noop());
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_matching_filters_by_phase() {
        let mut registry = ListenerRegistry::default();
        registry.add(EventTarget::Document, EventKind::Click, ListenPhase::Capture, noop());
        registry.add(EventTarget::Document, EventKind::Click, ListenPhase::Bubble, noop());
        registry.add(EventTarget::Document, EventKind::MouseOver, ListenPhase::Capture, noop());

        let capture = registry.matching(EventTarget::Document, EventKind::Click, Some(ListenPhase::Capture));
        let any = registry.matching(EventTarget::Document, EventKind::Click, None);
        assert_eq!(capture.len(), 1);
        assert_eq!(any.len(), 2);
    }

    #[test]
    fn test_event_flags() {
        let mut event = DomEvent::key_down(Key::Escape);
        assert_eq!(event.kind(), EventKind::KeyDown);
        assert_eq!(event.key(), Some(Key::Escape));
        assert!(!event.default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
