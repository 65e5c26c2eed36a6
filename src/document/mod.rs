//! Host document model.
//!
//! A [`Document`] is an arena of [`Element`]s rooted at a body element, plus
//! the document-wide state a picker interacts with:
//!
//! - body style (`overflow`, `cursor`)
//! - scroll offset and viewport
//! - a listener registry with capture/bubble dispatch
//! - pointer hit testing and the default click action (link navigation)
//! - a single "picking owner" claim so only one picker drives it at a time
//!
//! Elements are addressed by [`ElementId`] handles. Detaching an element keeps
//! it in the arena (it can be re-attached); removing it destroys the subtree.

mod color;
mod dispatch;
mod element;
mod events;
mod geometry;
mod style;

pub use color::{CssColor, Length, ParseCssError, Rgba};
pub use element::{Element, ElementId, ElementSpec};
pub use events::{
    DispatchOutcome, DomEvent, EventKind, EventTarget, Key, ListenPhase, Listener, ListenerId,
};
pub use geometry::{DomRect, Point, ScrollOffset, Viewport};
pub use style::{BodyStyle, Border, Cursor, ElementStyle, Overflow, PointerEvents, Position};

use slotmap::SlotMap;

use crate::error::{PickResult, PickerError};
use events::ListenerRegistry;

/// An element tree with document-wide state.
#[derive(Debug)]
pub struct Document {
    elements: SlotMap<ElementId, Element>,
    body: ElementId,
    body_style: BodyStyle,
    scroll: ScrollOffset,
    viewport: Viewport,
    listeners: ListenerRegistry,
    /// Element the pointer is currently over (for mouseover edge detection)
    pointer_over: Option<ElementId>,
    navigations: Vec<String>,
    picking_owner: Option<u64>,
    next_owner: u64,
}

impl Document {
    /// Create an empty document whose body fills the viewport.
    pub fn new(viewport: Viewport) -> Self {
        let mut elements = SlotMap::with_key();
        let mut body = Element::new("body");
        body.layout = DomRect::new(0.0, 0.0, viewport.width, viewport.height);
        let body = elements.insert(body);

        Self {
            elements,
            body,
            body_style: BodyStyle::default(),
            scroll: ScrollOffset::default(),
            viewport,
            listeners: ListenerRegistry::default(),
            pointer_over: None,
            navigations: Vec::new(),
            picking_owner: None,
            next_owner: 0,
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Whether the handle still resolves to an element in the arena.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of elements in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ========================================================================
    // Tree
    // ========================================================================

    /// Create a detached element.
    pub fn create_element(&mut self, tag_name: &str) -> ElementId {
        self.elements.insert(Element::new(tag_name))
    }

    /// Create an element from `spec` and append it to `parent`.
    pub fn append(&mut self, parent: ElementId, spec: ElementSpec) -> PickResult<ElementId> {
        if !self.contains(parent) {
            return Err(PickerError::UnknownElement(parent));
        }
        let child = self.elements.insert(spec.build());
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> PickResult<()> {
        if !self.contains(parent) {
            return Err(PickerError::UnknownElement(parent));
        }
        if !self.contains(child) {
            return Err(PickerError::UnknownElement(child));
        }
        self.remove_child(child);
        if let Some(el) = self.elements.get_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.elements.get_mut(parent) {
            el.children.push(child);
        }
        Ok(())
    }

    /// Detach `child` from its parent. Returns false if it had none.
    pub fn remove_child(&mut self, child: ElementId) -> bool {
        let Some(parent) = self.elements.get(child).and_then(|el| el.parent) else {
            return false;
        };
        if let Some(el) = self.elements.get_mut(parent) {
            el.children.retain(|c| *c != child);
        }
        if let Some(el) = self.elements.get_mut(child) {
            el.parent = None;
        }
        true
    }

    /// Destroy `id` and its whole subtree, along with listeners attached to
    /// those elements. The body cannot be removed.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        if id == self.body || !self.contains(id) {
            return false;
        }
        self.remove_child(id);

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.elements.remove(next) {
                stack.extend(el.children);
            }
            self.listeners.remove_target(next);
            if self.pointer_over == Some(next) {
                self.pointer_over = None;
            }
        }
        true
    }

    /// Whether `id` is reachable from the body.
    pub fn is_connected(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.body {
                return true;
            }
            current = self.elements.get(node).and_then(|el| el.parent);
        }
        false
    }

    /// `id` followed by its ancestors up to the root.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut chain = Vec::new();
        let mut current = self.contains(id).then_some(id);
        while let Some(node) = current {
            chain.push(node);
            current = self.elements.get(node).and_then(|el| el.parent);
        }
        chain
    }

    /// Connected elements in tree (paint) order, body first.
    pub fn tree_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(el) = self.elements.get(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        order
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Box of the element in page coordinates.
    pub fn page_rect(&self, id: ElementId) -> Option<DomRect> {
        let el = self.elements.get(id)?;
        match (el.style.position, el.style.placed_box()) {
            (Position::Absolute, Some(rect)) => Some(rect),
            _ => Some(el.layout),
        }
    }

    /// Box of the element relative to the viewport, like
    /// `getBoundingClientRect`.
    pub fn bounding_client_rect(&self, id: ElementId) -> Option<DomRect> {
        self.page_rect(id)
            .map(|rect| rect.translate(-self.scroll.x, -self.scroll.y))
    }

    /// Topmost connected element under a client-space point that accepts
    /// pointer events. Higher z-index wins, then later tree order.
    pub fn element_at(&self, client: Point) -> Option<ElementId> {
        let page = Point::new(client.x + self.scroll.x, client.y + self.scroll.y);
        let mut best: Option<(i32, ElementId)> = None;

        for id in self.tree_order() {
            let Some(el) = self.elements.get(id) else {
                continue;
            };
            if el.style.pointer_events == PointerEvents::None {
                continue;
            }
            let hit = self.page_rect(id).is_some_and(|rect| rect.contains(page));
            if !hit {
                continue;
            }
            let z = el.style.z_index.unwrap_or(0);
            if best.map_or(true, |(best_z, _)| z >= best_z) {
                best = Some((z, id));
            }
        }
        best.map(|(_, id)| id)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(body) = self.elements.get_mut(self.body) {
            body.layout.width = viewport.width;
            body.layout.height = body.layout.height.max(viewport.height);
        }
        self.clamp_scroll();
    }

    // ========================================================================
    // Scrolling and body style
    // ========================================================================

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Scroll by a delta. Returns false when scrolling is suspended or the
    /// offset did not change.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) -> bool {
        if self.body_style.scroll_locked() {
            return false;
        }
        let before = self.scroll;
        self.scroll.x += dx;
        self.scroll.y += dy;
        self.clamp_scroll();
        before != self.scroll
    }

    fn clamp_scroll(&mut self) {
        let (max_x, max_y) = self.max_scroll();
        self.scroll.x = self.scroll.x.clamp(0.0, max_x);
        self.scroll.y = self.scroll.y.clamp(0.0, max_y);
    }

    fn max_scroll(&self) -> (f64, f64) {
        let (mut right, mut bottom) = (0.0f64, 0.0f64);
        for id in self.tree_order() {
            if let Some(rect) = self.page_rect(id) {
                right = right.max(rect.right());
                bottom = bottom.max(rect.bottom());
            }
        }
        (
            (right - self.viewport.width).max(0.0),
            (bottom - self.viewport.height).max(0.0),
        )
    }

    pub fn body_style(&self) -> BodyStyle {
        self.body_style
    }

    pub fn body_style_mut(&mut self) -> &mut BodyStyle {
        &mut self.body_style
    }

    /// Links followed by unprevented clicks, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    pub fn add_listener(
        &mut self,
        target: EventTarget,
        kind: EventKind,
        phase: ListenPhase,
        listener: Listener,
    ) -> ListenerId {
        self.listeners.add(target, kind, phase, listener)
    }

    /// Remove a listener. Removing an unknown id is a no-op.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    /// Number of registered listeners of one kind, across all targets.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.count(kind)
    }

    // ========================================================================
    // Picking ownership
    // ========================================================================

    /// Hand out a token identifying one picker instance.
    pub fn allocate_owner(&mut self) -> u64 {
        self.next_owner += 1;
        self.next_owner
    }

    /// Claim exclusive use of the cursor, scroll mode and picking listeners.
    /// Re-claiming by the current owner succeeds.
    pub fn claim_picking(&mut self, owner: u64) -> PickResult<()> {
        match self.picking_owner {
            Some(current) if current != owner => Err(PickerError::DocumentBusy { owner: current }),
            _ => {
                self.picking_owner = Some(owner);
                Ok(())
            }
        }
    }

    /// Release the claim if `owner` holds it.
    pub fn release_picking(&mut self, owner: u64) {
        if self.picking_owner == Some(owner) {
            self.picking_owner = None;
        }
    }

    pub fn picking_owner(&self) -> Option<u64> {
        self.picking_owner
    }
}
