//! Image element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An image reference with display dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image source URL
    #[serde(default)]
    pub url: String,

    /// Width in pixels
    #[serde(default)]
    pub width: i32,

    /// Height in pixels
    #[serde(default)]
    pub height: i32,

    /// Alternative text
    #[serde(default)]
    pub alt: String,
}

impl Image {
    /// Create an image with empty alt text.
    pub fn new(url: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
            alt: String::new(),
        }
    }

    /// Set the alt text and return self.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Get dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Image] {} ({}x{})", self.url, self.width, self.height)
    }
}
