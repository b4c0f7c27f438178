//! Document model: a titled, ordered sequence of elements.
//!
//! The element set is closed (paragraph, image, table). Operations over it
//! live in visitors, see [`crate::visitor`].

mod document;
mod element;
mod image;
mod paragraph;
mod table;

pub use document::Document;
pub use element::Element;
pub use image::Image;
pub use paragraph::{Paragraph, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
pub use table::Table;
