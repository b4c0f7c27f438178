//! Structural validation.

use super::DEFAULT_MAX_PARAGRAPH_CHARS;
use crate::model::{Image, Paragraph, Table};
use crate::visitor::DocumentVisitor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checks every element against its variant's rules.
///
/// The validity flag starts true and latches to false on the first failing
/// element; it never resets. Traversal is not cut short, so later elements
/// are still checked and their issues recorded.
///
/// Tables are checked for positive dimensions and for a row count matching
/// the declared one. Row widths are not compared to the declared column
/// count.
#[derive(Debug, Clone)]
pub struct ValidationVisitor {
    is_valid: bool,
    max_paragraph_chars: usize,
    position: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidationVisitor {
    /// Create a visitor with the default paragraph length limit.
    pub fn new() -> Self {
        Self::with_max_paragraph_chars(DEFAULT_MAX_PARAGRAPH_CHARS)
    }

    /// Create a visitor with a custom paragraph length limit.
    pub fn with_max_paragraph_chars(max_paragraph_chars: usize) -> Self {
        Self {
            is_valid: true,
            max_paragraph_chars,
            position: 0,
            issues: Vec::new(),
        }
    }

    /// Whether every element visited so far passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failing rules found so far, in traversal order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Consume the visitor and return its issues.
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    fn fail(&mut self, kind: IssueKind) {
        log::debug!("element {} failed validation: {}", self.position, kind);
        self.is_valid = false;
        self.issues.push(ValidationIssue {
            index: self.position,
            kind,
        });
    }
}

impl Default for ValidationVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for ValidationVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        let len = paragraph.text.chars().count();
        if len == 0 {
            self.fail(IssueKind::EmptyText);
        } else if len >= self.max_paragraph_chars {
            self.fail(IssueKind::TextTooLong {
                len,
                max: self.max_paragraph_chars,
            });
        }
        self.position += 1;
    }

    fn visit_image(&mut self, image: &Image) {
        if image.url.is_empty() {
            self.fail(IssueKind::MissingUrl);
        }
        if image.width <= 0 || image.height <= 0 {
            self.fail(IssueKind::NonPositiveSize {
                width: image.width,
                height: image.height,
            });
        }
        self.position += 1;
    }

    fn visit_table(&mut self, table: &Table) {
        if table.rows <= 0 || table.columns <= 0 {
            self.fail(IssueKind::NonPositiveShape {
                rows: table.rows,
                columns: table.columns,
            });
        }
        let actual = table.row_count();
        if usize::try_from(table.rows).map_or(true, |declared| declared != actual) {
            self.fail(IssueKind::RowCountMismatch {
                declared: table.rows,
                actual,
            });
        }
        self.position += 1;
    }
}

/// A failing rule and the element it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 0-based position of the element in traversal order
    pub index: usize,

    /// Which rule failed
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element {}: {}", self.index, self.kind)
    }
}

/// Validation rules an element can fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum IssueKind {
    /// Paragraph has no text
    EmptyText,

    /// Paragraph text reaches the length limit
    TextTooLong {
        /// Text length in characters
        len: usize,
        /// Exclusive limit
        max: usize,
    },

    /// Image has no URL
    MissingUrl,

    /// Image width or height is not positive
    NonPositiveSize {
        /// Declared width
        width: i32,
        /// Declared height
        height: i32,
    },

    /// Table row or column count is not positive
    NonPositiveShape {
        /// Declared rows
        rows: i32,
        /// Declared columns
        columns: i32,
    },

    /// Grid row count differs from the declared row count
    RowCountMismatch {
        /// Declared rows
        declared: i32,
        /// Rows present in the grid
        actual: usize,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::EmptyText => write!(f, "paragraph text is empty"),
            IssueKind::TextTooLong { len, max } => {
                write!(f, "paragraph text has {} characters (limit {})", len, max)
            }
            IssueKind::MissingUrl => write!(f, "image URL is empty"),
            IssueKind::NonPositiveSize { width, height } => {
                write!(f, "image size {}x{} is not positive", width, height)
            }
            IssueKind::NonPositiveShape { rows, columns } => {
                write!(f, "table shape {}x{} is not positive", rows, columns)
            }
            IssueKind::RowCountMismatch { declared, actual } => {
                write!(f, "table declares {} rows but has {}", declared, actual)
            }
        }
    }
}
