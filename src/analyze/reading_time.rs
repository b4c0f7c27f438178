//! Reading-time estimation.

use super::{count_words, table_words, DEFAULT_WORDS_PER_MINUTE};
use crate::model::{Image, Paragraph, Table};
use crate::visitor::DocumentVisitor;

/// Estimates reading time from the words seen so far.
///
/// Minutes are computed on each call from the live total, so reading them
/// mid-traversal gives the partial estimate.
#[derive(Debug, Clone)]
pub struct ReadingTimeVisitor {
    total_words: usize,
    words_per_minute: usize,
}

impl ReadingTimeVisitor {
    /// Create a visitor reading at 200 words per minute.
    pub fn new() -> Self {
        Self::with_words_per_minute(DEFAULT_WORDS_PER_MINUTE)
    }

    /// Create a visitor with a custom reading speed (at least 1).
    pub fn with_words_per_minute(words_per_minute: usize) -> Self {
        Self {
            total_words: 0,
            words_per_minute: words_per_minute.max(1),
        }
    }

    /// Whole minutes needed to read the words seen so far (floored).
    pub fn reading_time_minutes(&self) -> usize {
        self.total_words / self.words_per_minute
    }

    /// Words seen so far.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Reading speed in words per minute.
    pub fn words_per_minute(&self) -> usize {
        self.words_per_minute
    }
}

impl Default for ReadingTimeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for ReadingTimeVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.total_words += count_words(&paragraph.text);
    }

    fn visit_image(&mut self, _image: &Image) {}

    fn visit_table(&mut self, table: &Table) {
        self.total_words += table_words(table);
    }
}
