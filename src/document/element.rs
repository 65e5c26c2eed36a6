//! Element nodes and the builder used to create them.

use slotmap::new_key_type;

use super::geometry::DomRect;
use super::style::ElementStyle;

new_key_type! {
    /// Generational handle to an element in a [`Document`](super::Document).
    ///
    /// Handles are cheap lookups, not references: once an element is removed
    /// from the arena its handle stops resolving instead of dangling.
    pub struct ElementId;
}

/// A single element in the document tree.
#[derive(Debug, Clone)]
pub struct Element {
    pub(super) tag_name: String,
    pub(super) id: String,
    pub(super) classes: Vec<String>,
    pub(super) layout: DomRect,
    pub(super) style: ElementStyle,
    pub(super) text: Option<String>,
    pub(super) href: Option<String>,
    pub(super) parent: Option<ElementId>,
    pub(super) children: Vec<ElementId>,
}

impl Element {
    pub(super) fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_uppercase(),
            id: String::new(),
            classes: Vec::new(),
            layout: DomRect::default(),
            style: ElementStyle::default(),
            text: None,
            href: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Tag name in upper case, as the DOM reports it (`DIV`, `A`).
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Class list in insertion order, without duplicates.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Add a class; returns false if it was already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.classes.contains(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Normal-flow box in page coordinates.
    pub fn layout(&self) -> DomRect {
        self.layout
    }

    pub fn set_layout(&mut self, layout: DomRect) {
        self.layout = layout;
    }

    pub fn style(&self) -> &ElementStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Link target; clicking a linked element navigates unless prevented.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Builder describing an element to append to the document.
///
/// ```
/// use elpick::document::{Document, DomRect, ElementSpec, Viewport};
///
/// let mut doc = Document::new(Viewport::new(80.0, 24.0));
/// let link = doc
///     .append(
///         doc.body(),
///         ElementSpec::new("a")
///             .id("home")
///             .class("nav-link")
///             .layout(DomRect::new(0.0, 0.0, 10.0, 1.0))
///             .href("/"),
///     )
///     .unwrap();
/// assert_eq!(doc.get(link).unwrap().tag_name(), "A");
/// ```
#[derive(Debug, Clone)]
pub struct ElementSpec {
    element: Element,
}

impl ElementSpec {
    pub fn new(tag_name: &str) -> Self {
        Self {
            element: Element::new(tag_name),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.set_id(id);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.element.add_class(class);
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.element.add_class(class);
        }
        self
    }

    pub fn layout(mut self, layout: DomRect) -> Self {
        self.element.layout = layout;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.set_text(text);
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.element.href = Some(href.into());
        self
    }

    pub fn style(mut self, style: ElementStyle) -> Self {
        self.element.style = style;
        self
    }

    pub(super) fn build(self) -> Element {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_is_uppercased() {
        assert_eq!(Element::new("section").tag_name(), "SECTION");
    }

    #[test]
    fn test_class_list_is_an_ordered_set() {
        let mut el = Element::new("div");
        assert!(el.add_class("card"));
        assert!(el.add_class("active"));
        assert!(!el.add_class("card"));
        assert!(!el.add_class(""));
        assert_eq!(el.classes(), &["card".to_string(), "active".to_string()]);

        assert!(el.remove_class("card"));
        assert!(!el.remove_class("card"));
        assert_eq!(el.classes(), &["active".to_string()]);
    }

    #[test]
    fn test_element_spec_builder_collects_fields() {
        let el = ElementSpec::new("a")
            .id("docs")
            .classes(["nav", "nav-link", "nav"])
            .text("Docs")
            .href("/docs")
            .build();
        assert_eq!(el.id(), "docs");
        assert_eq!(el.classes().len(), 2);
        assert_eq!(el.text(), Some("Docs"));
        assert_eq!(el.href(), Some("/docs"));
    }
}
