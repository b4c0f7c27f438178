//! The closed set of document elements.

use super::{Image, Paragraph, Table};
use crate::visitor::{DocumentVisitor, Visitable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// A content element in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// An image reference
    Image(Image),

    /// A table
    Table(Table),
}

impl Element {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Paragraph(_) => "paragraph",
            Element::Image(_) => "image",
            Element::Table(_) => "table",
        }
    }

    /// Write the one-line diagnostic description of this element.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Element::Image(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }
}

impl Visitable for Element {
    fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Element::Paragraph(p) => p.accept(visitor),
            Element::Image(img) => img.accept(visitor),
            Element::Table(t) => t.accept(visitor),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Paragraph(p) => fmt::Display::fmt(p, f),
            Element::Image(img) => fmt::Display::fmt(img, f),
            Element::Table(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Element::Paragraph(paragraph)
    }
}

impl From<Image> for Element {
    fn from(image: Image) -> Self {
        Element::Image(image)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_variants() {
        let el: Element = Image::new("a.png", 1, 1).into();
        assert!(el.is_image());
        assert!(!el.is_paragraph());
        assert_eq!(el.kind(), "image");
    }

    #[test]
    fn test_element_render() {
        let el: Element = Table::new(2, 2).into();
        let mut out = Vec::new();
        el.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[Table] 2x2\n");
    }

    #[test]
    fn test_element_json_tag() {
        let el: Element = Paragraph::new("Hi").into();
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("\"type\":\"paragraph\""));

        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, el);
    }
}
