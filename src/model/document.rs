//! Document-level types.

use super::Element;
use crate::visitor::{DocumentVisitor, Visitable};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// A titled document holding elements in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    #[serde(default)]
    pub title: String,

    /// Elements in traversal order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    /// Append an element. No validation happens here.
    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Append an element and return self.
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.add_element(element);
        self
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by index (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Iterate over elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Write the diagnostic description of every element, one per line.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for element in &self.elements {
            element.render(out)?;
        }
        Ok(())
    }
}

impl Visitable for Document {
    fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        log::debug!(
            "traversing document '{}' ({} elements)",
            self.title,
            self.elements.len()
        );
        for (index, element) in self.elements.iter().enumerate() {
            log::trace!("dispatching {} at index {}", element.kind(), index);
            element.accept(visitor);
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Image, Paragraph, Table};

    #[test]
    fn test_document_new() {
        let doc = Document::new("Annual Report");
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.title, "Annual Report");
    }

    #[test]
    fn test_add_element_keeps_order() {
        let mut doc = Document::new("T");
        doc.add_element(Paragraph::new("first"));
        doc.add_element(Image::new("b.png", 1, 1));
        doc.add_element(Table::new(1, 1));

        let kinds: Vec<&str> = doc.iter().map(Element::kind).collect();
        assert_eq!(kinds, vec!["paragraph", "image", "table"]);
        assert!(doc.get(0).is_some_and(Element::is_paragraph));
        assert!(doc.get(3).is_none());
    }

    #[test]
    fn test_add_element_accepts_invalid_content() {
        let doc = Document::new("T")
            .with_element(Paragraph::new(""))
            .with_element(Image::new("", -1, 0));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_document_render() {
        let doc = Document::new("T")
            .with_element(Paragraph::new("Hello"))
            .with_element(Image::new("chart.png", 800, 600))
            .with_element(Table::new(3, 4));

        let mut out = Vec::new();
        doc.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Paragraph] Hello\n[Image] chart.png (800x600)\n[Table] 3x4\n"
        );
    }

    #[test]
    fn test_document_json_defaults() {
        let doc: Document = serde_json::from_str(
            r#"{"title": "T", "elements": [{"type": "table", "rows": 2, "columns": 2}]}"#,
        )
        .unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.elements[0], Element::Table(Table::new(2, 2)));
    }
}
