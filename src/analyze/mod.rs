//! Document analysis visitors.
//!
//! Each visitor accumulates one metric over a single traversal:
//!
//! - [`WordCountVisitor`] - total words
//! - [`ReadingTimeVisitor`] - estimated reading minutes
//! - [`ValidationVisitor`] - latched validity flag plus the failing rules
//! - [`ElementCountVisitor`] - number of paragraphs, images, and tables
//!
//! [`analyze`] runs all of them in one pass and collects a [`Report`].

mod options;
mod reading_time;
mod report;
mod stats;
mod validation;
mod word_count;

pub use options::{AnalyzeOptions, DEFAULT_MAX_PARAGRAPH_CHARS, DEFAULT_WORDS_PER_MINUTE};
pub use reading_time::ReadingTimeVisitor;
pub use report::Report;
pub use stats::ElementCountVisitor;
pub use validation::{IssueKind, ValidationIssue, ValidationVisitor};
pub use word_count::WordCountVisitor;

use crate::model::{Document, Table};
use crate::visitor::{CompositeVisitor, Visitable};

/// Count the words in `text`.
///
/// Words are the non-empty segments between single space characters. Tabs
/// and newlines are not separators.
pub fn count_words(text: &str) -> usize {
    text.split(' ').filter(|s| !s.is_empty()).count()
}

/// Sum of the word counts of every cell, in row-major order.
pub(crate) fn table_words(table: &Table) -> usize {
    table.iter_cells().map(count_words).sum()
}

/// Analyze a document in a single traversal.
pub fn analyze(doc: &Document, options: &AnalyzeOptions) -> Report {
    let mut words = WordCountVisitor::new();
    let mut reading = ReadingTimeVisitor::with_words_per_minute(options.words_per_minute);
    let mut validation = ValidationVisitor::with_max_paragraph_chars(options.max_paragraph_chars);
    let mut counts = ElementCountVisitor::new();

    {
        let mut all = CompositeVisitor::new()
            .with_visitor(&mut words)
            .with_visitor(&mut reading)
            .with_visitor(&mut validation)
            .with_visitor(&mut counts);
        doc.accept(&mut all);
    }

    Report {
        title: doc.title.clone(),
        paragraphs: counts.paragraphs,
        images: counts.images,
        tables: counts.tables,
        total_words: words.total_words(),
        reading_time_minutes: reading.reading_time_minutes(),
        is_valid: validation.is_valid(),
        issues: validation.into_issues(),
    }
}

/// Analyze many documents, in parallel when enabled.
///
/// Reports come back in the same order as `docs`.
pub fn analyze_batch(docs: &[Document], options: &AnalyzeOptions) -> Vec<Report> {
    #[cfg(feature = "parallel")]
    if options.parallel {
        use rayon::prelude::*;
        log::debug!("analyzing {} documents in parallel", docs.len());
        return docs.par_iter().map(|doc| analyze(doc, options)).collect();
    }

    docs.iter().map(|doc| analyze(doc, options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Image, Paragraph};

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Hello world"), 2);
        assert_eq!(count_words("  spaced   out  "), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_count_words_splits_on_space_only() {
        assert_eq!(count_words("tab\tseparated"), 1);
        assert_eq!(count_words("line\nbreak here"), 2);
    }

    #[test]
    fn test_table_words() {
        assert_eq!(table_words(&Table::new(2, 2)), 8);
        assert_eq!(table_words(&Table::new(0, 0)), 0);
    }

    #[test]
    fn test_analyze_single_pass() {
        let doc = Document::new("Report")
            .with_element(Paragraph::new("Hello world"))
            .with_element(Image::new("chart.png", 800, 600))
            .with_element(Table::new(2, 2));

        let report = analyze(&doc, &AnalyzeOptions::default());
        assert_eq!(report.title, "Report");
        assert_eq!(report.total_words, 10);
        assert_eq!(report.reading_time_minutes, 0);
        assert!(report.is_valid);
        assert!(report.issues.is_empty());
        assert_eq!(
            (report.paragraphs, report.images, report.tables),
            (1, 1, 1)
        );
    }

    #[test]
    fn test_analyze_batch_preserves_order() {
        let docs: Vec<Document> = (0..8)
            .map(|i| Document::new(format!("doc-{}", i)).with_element(Paragraph::new("a b")))
            .collect();

        let sequential = analyze_batch(&docs, &AnalyzeOptions::new().with_parallel(false));
        let parallel = analyze_batch(&docs, &AnalyzeOptions::new().with_parallel(true));

        assert_eq!(sequential, parallel);
        let titles: Vec<&str> = parallel.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles[0], "doc-0");
        assert_eq!(titles[7], "doc-7");
    }
}
