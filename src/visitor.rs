//! Visitor pattern over document elements.
//!
//! Elements implement [`Visitable`]; operations implement [`DocumentVisitor`].
//! Calling [`Visitable::accept`] on an element invokes exactly one handler on
//! the visitor, the one matching the element's own variant. A [`Document`]
//! forwards `accept` to each of its elements in insertion order.
//!
//! New operations are added by writing a new visitor; the element types do
//! not change. Adding a new element variant means adding a handler here and
//! implementing it in every visitor.
//!
//! # Example
//!
//! ```
//! use docvisit::model::{Document, Image, Paragraph, Table};
//! use docvisit::visitor::{DocumentVisitor, Visitable};
//!
//! #[derive(Default)]
//! struct ImageCounter {
//!     images: usize,
//! }
//!
//! impl DocumentVisitor for ImageCounter {
//!     fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
//!
//!     fn visit_image(&mut self, _image: &Image) {
//!         self.images += 1;
//!     }
//!
//!     fn visit_table(&mut self, _table: &Table) {}
//! }
//!
//! let mut doc = Document::new("Report");
//! doc.add_element(Image::new("chart.png", 800, 600));
//! doc.add_element(Paragraph::new("Summary"));
//!
//! let mut counter = ImageCounter::default();
//! doc.accept(&mut counter);
//! assert_eq!(counter.images, 1);
//! ```
//!
//! [`Document`]: crate::model::Document

use crate::model::{Image, Paragraph, Table};

/// An operation over every element variant.
///
/// Every handler is required: a visitor with nothing to do for a variant
/// still provides an empty handler.
pub trait DocumentVisitor {
    /// Handle a paragraph.
    fn visit_paragraph(&mut self, paragraph: &Paragraph);

    /// Handle an image.
    fn visit_image(&mut self, image: &Image);

    /// Handle a table.
    fn visit_table(&mut self, table: &Table);
}

impl<V: DocumentVisitor + ?Sized> DocumentVisitor for &mut V {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        (**self).visit_paragraph(paragraph);
    }

    fn visit_image(&mut self, image: &Image) {
        (**self).visit_image(image);
    }

    fn visit_table(&mut self, table: &Table) {
        (**self).visit_table(table);
    }
}

impl<V: DocumentVisitor + ?Sized> DocumentVisitor for Box<V> {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        (**self).visit_paragraph(paragraph);
    }

    fn visit_image(&mut self, image: &Image) {
        (**self).visit_image(image);
    }

    fn visit_table(&mut self, table: &Table) {
        (**self).visit_table(table);
    }
}

/// Something a [`DocumentVisitor`] can be dispatched to.
pub trait Visitable {
    /// Dispatch the visitor to the handler(s) for this value.
    ///
    /// Runs synchronously; returns once the visitor has handled the value.
    fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V);
}

impl Visitable for Paragraph {
    fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_paragraph(self);
    }
}

impl Visitable for Image {
    fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_image(self);
    }
}

impl Visitable for Table {
    fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_table(self);
    }
}

/// Visitor that forwards each element to several visitors.
///
/// Lets one traversal feed many accumulators. Visitors are called in the
/// order they were added, and every visitor sees every element.
#[derive(Default)]
pub struct CompositeVisitor<'a> {
    visitors: Vec<&'a mut dyn DocumentVisitor>,
}

impl<'a> CompositeVisitor<'a> {
    /// Create an empty composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor>(mut self, visitor: &'a mut V) -> Self {
        self.visitors.push(visitor);
        self
    }

    /// Add a visitor to the chain in place.
    pub fn push(&mut self, visitor: &'a mut dyn DocumentVisitor) {
        self.visitors.push(visitor);
    }

    /// Number of chained visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if no visitors are chained.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl DocumentVisitor for CompositeVisitor<'_> {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        for visitor in &mut self.visitors {
            visitor.visit_paragraph(paragraph);
        }
    }

    fn visit_image(&mut self, image: &Image) {
        for visitor in &mut self.visitors {
            visitor.visit_image(image);
        }
    }

    fn visit_table(&mut self, table: &Table) {
        for visitor in &mut self.visitors {
            visitor.visit_table(table);
        }
    }
}
