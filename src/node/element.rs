use super::Attributes;
use crate::error::XmlResult;

/// A node in the document tree, with a name, attributes, and either text or children:
/// `<name attr="value">text</name>` or `<name><child/></name>`
///
/// All fields are public so trees can be inspected, changed, or built by hand.
/// Each element owns its children; there are no links back to parents.
///
/// Dropping and comparing trees is non-recursive, so arbitrarily deep trees are safe.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// The tag name.
    pub name: String,

    /// The attributes of the element. Names are unique.
    pub attributes: Attributes,

    /// Text content, only captured for elements without children.
    pub text: String,

    /// Child elements, in document order.
    pub children: Vec<Element>,
}
impl Element {
    /// Create an element with no attributes, text, or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            text: String::new(),
            children: vec![],
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Builder-style text setter.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style child appender.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute, replacing any previous value. Returns the previous value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(name, value)
    }

    /// Get the first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Iterate over the children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns true if the element has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Create an XML string from this element and its subtree.
    ///
    /// In compact mode everything is written on one line. In pretty mode every child
    /// starts on a new line, indented with one tab per level, and elements with
    /// children close on their own line.
    ///
    /// Text and attribute values are entity encoded, so the output parses back into
    /// an equal tree.
    ///
    /// # Errors
    /// Can fail if a string in the tree cannot be entity encoded.
    ///
    /// # Example
    /// ```rust
    /// use tagtree::Element;
    ///
    /// let root = Element::new("a").with_child(Element::new("b").with_text("hi"));
    /// assert_eq!(root.render(false).unwrap(), "<a><b>hi</b></a>");
    /// assert_eq!(root.render(true).unwrap(), "<a>\n\t<b>hi</b>\n</a>");
    /// ```
    pub fn render(&self, pretty: bool) -> XmlResult<String> {
        let mut buffer = vec![];
        self.write_xml(&mut buffer, pretty)?;

        let buffer = String::from_utf8(buffer).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to convert to UTF-8: {e}"),
            )
        })?;
        Ok(buffer)
    }

    /// Write this element as an XML string using the given writer.
    ///
    /// See [`Element::render`] for more details.
    ///
    /// # Errors
    /// Can fail if the writer fails, or a string cannot be entity encoded.
    pub fn write_xml<W: std::io::Write>(&self, writer: &mut W, pretty: bool) -> XmlResult<()> {
        crate::to_xml::write_xml(writer, self, pretty)?;
        Ok(())
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.name != b.name
                || a.text != b.text
                || a.attributes != b.attributes
                || a.children.len() != b.children.len()
            {
                return false;
            }
            pending.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}
impl Eq for Element {}

impl Drop for Element {
    fn drop(&mut self) {
        // Children are emptied before they drop, so nothing recurses
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut child) = stack.pop() {
            stack.append(&mut child.children);
        }
    }
}

/// Renders compact XML with `{}` and indented XML with `{:#}`.
impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let xml = self.render(f.alternate()).map_err(|_| std::fmt::Error)?;
        f.write_str(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("library")
            .with_attribute("city", "Paris")
            .with_child(Element::new("book").with_attribute("id", "1").with_text("Dune"))
            .with_child(Element::new("book").with_attribute("id", "2"))
            .with_child(Element::new("shelf"))
    }

    #[test]
    fn test_builders() {
        let root = sample();
        assert_eq!(root.name, "library");
        assert_eq!(root.attribute("city"), Some("Paris"));
        assert_eq!(root.children.len(), 3);
        assert!(!root.is_leaf());
        assert!(root.children[2].is_leaf());
    }

    #[test]
    fn test_child_lookup() {
        let root = sample();
        assert_eq!(root.child("book").map(|b| b.text.as_str()), Some("Dune"));
        assert_eq!(root.children_named("book").count(), 2);
        assert!(root.child("missing").is_none());
    }

    #[test]
    fn test_set_attribute_returns_previous() {
        let mut root = sample();
        assert_eq!(root.set_attribute("city", "Lyon"), Some("Paris".to_string()));
        assert_eq!(root.set_attribute("country", "FR"), None);
        assert_eq!(root.attribute("city"), Some("Lyon"));
    }

    #[test]
    fn test_display() {
        let root = Element::new("a").with_child(Element::new("b").with_text("x"));
        assert_eq!(format!("{root}"), "<a><b>x</b></a>");
        assert_eq!(format!("{root:#}"), "<a>\n\t<b>x</b>\n</a>");
    }

    fn nested(depth: usize, leaf: &str) -> Element {
        let mut element = Element::new("n").with_text(leaf);
        for _ in 0..depth {
            element = Element::new("n").with_child(element);
        }
        element
    }

    #[test]
    fn test_equality() {
        assert_eq!(sample(), sample());

        let mut other = sample();
        other.children[1].set_attribute("id", "3");
        assert_ne!(sample(), other);

        let mut other = sample();
        other.children.pop();
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_deep_tree_eq_and_drop() {
        let a = nested(200_000, "x");
        let b = nested(200_000, "x");
        let c = nested(200_000, "y");
        assert!(a == b);
        assert!(a != c);

        drop(a);
        drop(b);
        drop(c);
    }
}
