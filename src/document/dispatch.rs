//! Event dispatch: capture, target and bubble phases plus default actions.

use super::events::{DispatchOutcome, DomEvent, EventKind, EventTarget, Key, ListenPhase};
use super::geometry::Point;
use super::Document;

impl Document {
    /// Dispatch an event and run the default action if nobody prevented it.
    ///
    /// Listener order follows the DOM: document capture listeners, ancestor
    /// capture listeners from the root down, all listeners on the target,
    /// ancestor bubble listeners upwards, then document bubble listeners.
    /// `stop_propagation` ends dispatch once the current target is done.
    /// A listener removed by an earlier listener during this dispatch does
    /// not run.
    pub fn dispatch(&mut self, mut event: DomEvent) -> DispatchOutcome {
        let kind = event.kind();
        let target = event.target().filter(|t| self.contains(*t));

        let mut path = target.map(|t| self.ancestors(t)).unwrap_or_default();
        path.reverse();

        let mut stages: Vec<(EventTarget, Option<ListenPhase>)> = Vec::new();
        stages.push((EventTarget::Document, Some(ListenPhase::Capture)));
        if let Some((&at_target, above)) = path.split_last() {
            for &ancestor in above {
                stages.push((EventTarget::Element(ancestor), Some(ListenPhase::Capture)));
            }
            stages.push((EventTarget::Element(at_target), None));
            for &ancestor in above.iter().rev() {
                stages.push((EventTarget::Element(ancestor), Some(ListenPhase::Bubble)));
            }
        }
        stages.push((EventTarget::Document, Some(ListenPhase::Bubble)));

        let mut invoked = 0;
        for (current, phase) in stages {
            if event.propagation_stopped() {
                break;
            }
            for (id, listener) in self.listeners.matching(current, kind, phase) {
                if !self.listeners.contains(id) {
                    continue;
                }
                listener(self, &mut event);
                invoked += 1;
            }
        }

        let navigated = match (kind, target) {
            (EventKind::Click, Some(target)) if !event.default_prevented() => {
                self.follow_link(target)
            }
            _ => None,
        };

        DispatchOutcome {
            target,
            default_prevented: event.default_prevented(),
            listeners_invoked: invoked,
            navigated,
        }
    }

    /// Report pointer movement in client coordinates.
    ///
    /// A mouseover is dispatched only when the element under the pointer
    /// changes, so moving within one element produces no signal.
    pub fn pointer_move(&mut self, client: Point) -> Option<DispatchOutcome> {
        let target = self.element_at(client);
        if target == self.pointer_over {
            return None;
        }
        self.pointer_over = target;
        let target = target?;
        Some(self.dispatch(DomEvent::pointer(EventKind::MouseOver, target, Some(client))))
    }

    /// Report that the pointer left the document.
    ///
    /// The next `pointer_move` over any element dispatches a mouseover, even
    /// if it lands on the element hovered before leaving.
    pub fn pointer_leave(&mut self) {
        self.pointer_over = None;
    }

    /// Report a primary-button click at a client-space point.
    pub fn click_at(&mut self, client: Point) -> DispatchOutcome {
        match self.element_at(client) {
            Some(target) => self.dispatch(DomEvent::pointer(EventKind::Click, target, Some(client))),
            None => DispatchOutcome::default(),
        }
    }

    pub fn key_down(&mut self, key: Key) -> DispatchOutcome {
        self.dispatch(DomEvent::key_down(key))
    }

    fn follow_link(&mut self, target: super::ElementId) -> Option<String> {
        let href = self
            .ancestors(target)
            .into_iter()
            .find_map(|id| self.get(id).and_then(|el| el.href().map(str::to_string)))?;
        tracing::debug!(href = %href, "following link");
        self.navigations.push(href.clone());
        Some(href)
    }
}
