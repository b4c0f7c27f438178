//! Paragraph element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default font family for new paragraphs.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Default font size (in pixels) for new paragraphs.
pub const DEFAULT_FONT_SIZE: i32 = 12;

/// A paragraph of text with font settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text content
    #[serde(default)]
    pub text: String,

    /// Font family name
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: i32,
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> i32 {
    DEFAULT_FONT_SIZE
}

impl Paragraph {
    /// Create a paragraph with the default font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_family: default_font_family(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Set the font family and return self.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size and return self.
    pub fn with_font_size(mut self, size: i32) -> Self {
        self.font_size = size;
        self
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Paragraph] {}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_defaults() {
        let p = Paragraph::new("Hello");
        assert_eq!(p.font_family, "Arial");
        assert_eq!(p.font_size, 12);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_paragraph_builder() {
        let p = Paragraph::new("Hi")
            .with_font_family("Georgia")
            .with_font_size(16);
        assert_eq!(p.font_family, "Georgia");
        assert_eq!(p.font_size, 16);
    }

    #[test]
    fn test_paragraph_display() {
        assert_eq!(Paragraph::new("Intro").to_string(), "[Paragraph] Intro");
    }

    #[test]
    fn test_paragraph_missing_fields_deserialize() {
        let p: Paragraph = serde_json::from_str("{}").unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.font_family, "Arial");
        assert_eq!(p.font_size, 12);
    }
}
