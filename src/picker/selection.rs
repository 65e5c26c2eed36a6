//! Selection results and the caller's handler slot.

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::{Document, Element, ElementId};

/// Descriptive identity of a confirmed element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfo {
    /// Lower-cased tag name (`a`, `div`)
    pub tag_name: String,
    /// The element's id, empty when it has none
    pub id: String,
    /// Class list in document order
    pub classes: Vec<String>,
}

impl ElementInfo {
    pub fn from_element(element: &Element) -> Self {
        Self {
            tag_name: element.tag_name().to_ascii_lowercase(),
            id: element.id().to_string(),
            classes: element.classes().to_vec(),
        }
    }

    /// Compact CSS-selector form, e.g. `a#home.nav-link.active`.
    pub fn selector(&self) -> String {
        let mut out = self.tag_name.clone();
        if !self.id.is_empty() {
            out.push('#');
            out.push_str(&self.id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

impl fmt::Display for ElementInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// What the caller receives when a click confirms a hovered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    /// Live handle to the confirmed element
    pub target: ElementId,
    pub info: ElementInfo,
}

impl SelectionResult {
    /// Derive the result for `target`, or `None` if it left the document.
    pub fn capture(doc: &Document, target: ElementId) -> Option<Self> {
        if !doc.is_connected(target) {
            return None;
        }
        let element = doc.get(target)?;
        Some(Self {
            target,
            info: ElementInfo::from_element(element),
        })
    }
}

/// Caller-supplied selection callback.
pub type SelectHandler = Box<dyn FnMut(&mut Document, SelectionResult)>;

/// Single-slot holder for the current handler.
///
/// The slot is read at confirm time, so replacing the handler while a picker
/// is armed affects the pending selection.
#[derive(Default)]
pub(crate) struct HandlerSlot {
    handler: RefCell<Option<SelectHandler>>,
}

impl HandlerSlot {
    pub(crate) fn new(handler: SelectHandler) -> Self {
        Self {
            handler: RefCell::new(Some(handler)),
        }
    }

    pub(crate) fn replace(&self, handler: SelectHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }

    /// Call the current handler. The handler is taken out of the slot for the
    /// duration of the call so it may replace itself; a replacement installed
    /// during the call wins over the one being run.
    pub(crate) fn invoke(&self, doc: &mut Document, selection: SelectionResult) {
        let Some(mut handler) = self.handler.borrow_mut().take() else {
            tracing::warn!(target_info = %selection.info, "selection confirmed with no handler installed");
            return;
        };
        handler(doc, selection);

        let mut slot = self.handler.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
    }
}

impl fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let installed = self
            .handler
            .try_borrow()
            .map(|slot| slot.is_some())
            .unwrap_or(true);
        f.debug_struct("HandlerSlot")
            .field("installed", &installed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::document::{ElementSpec, Viewport};

    fn doc_with_link() -> (Document, ElementId) {
        let mut doc = Document::new(Viewport::new(100.0, 100.0));
        let body = doc.body();
        let link = doc
            .append(body, ElementSpec::new("A").id("home").classes(["nav", "active"]))
            .unwrap();
        (doc, link)
    }

    #[test]
    fn test_info_lowercases_tag_and_keeps_class_order() {
        let (doc, link) = doc_with_link();
        let result = SelectionResult::capture(&doc, link).unwrap();
        assert_eq!(result.target, link);
        assert_eq!(result.info.tag_name, "a");
        assert_eq!(result.info.id, "home");
        assert_eq!(result.info.classes, vec!["nav", "active"]);
        assert_eq!(result.info.selector(), "a#home.nav.active");
    }

    #[test]
    fn test_capture_of_removed_element_is_none() {
        let (mut doc, link) = doc_with_link();
        doc.remove_element(link);
        assert!(SelectionResult::capture(&doc, link).is_none());
    }

    #[test]
    fn test_capture_of_detached_element_is_none() {
        let (mut doc, link) = doc_with_link();
        doc.remove_child(link);
        assert!(doc.contains(link));
        assert!(SelectionResult::capture(&doc, link).is_none());
    }

    #[test]
    fn test_info_serializes_camel_case() {
        let info = ElementInfo {
            tag_name: "div".into(),
            id: String::new(),
            classes: vec![],
        };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"tagName":"div","id":"","classes":[]}"#);
    }

    #[test]
    fn test_slot_invokes_latest_handler() {
        let (mut doc, link) = doc_with_link();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&calls);
        let slot = HandlerSlot::new(Box::new(move |_: &mut Document, _: SelectionResult| {
            first.borrow_mut().push("first")
        }));
        let second = Rc::clone(&calls);
        slot.replace(Box::new(move |_: &mut Document, _: SelectionResult| {
            second.borrow_mut().push("second")
        }));

        let selection = SelectionResult::capture(&doc, link).unwrap();
        slot.invoke(&mut doc, selection);
        assert_eq!(*calls.borrow(), vec!["second"]);
    }

    #[test]
    fn test_empty_slot_is_a_noop() {
        let (mut doc, link) = doc_with_link();
        let slot = HandlerSlot::default();
        let selection = SelectionResult::capture(&doc, link).unwrap();
        slot.invoke(&mut doc, selection);
    }
}
