//! Analysis report.

use super::ValidationIssue;
use serde::{Deserialize, Serialize};

/// Combined result of analyzing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Document title
    pub title: String,

    /// Number of paragraphs
    pub paragraphs: usize,

    /// Number of images
    pub images: usize,

    /// Number of tables
    pub tables: usize,

    /// Total words in paragraphs and table cells
    pub total_words: usize,

    /// Estimated reading time in whole minutes
    pub reading_time_minutes: usize,

    /// Whether every element passed validation
    pub is_valid: bool,

    /// Failing validation rules
    pub issues: Vec<ValidationIssue>,
}

impl Report {
    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.paragraphs + self.images + self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json() {
        let report = Report {
            title: "T".into(),
            paragraphs: 2,
            tables: 1,
            total_words: 12,
            is_valid: true,
            ..Default::default()
        };
        assert_eq!(report.element_count(), 3);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_words\":12"));
        assert!(json.contains("\"is_valid\":true"));
    }
}
