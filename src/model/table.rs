//! Table element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A table with declared dimensions and a grid of text cells.
///
/// [`Table::new`] always builds a grid of `rows` rows with `columns`
/// placeholder cells each. The `cells` field is public, so the grid can be
/// changed afterwards and drift away from the declared dimensions. Validation
/// reports a row-count mismatch but does not look at per-row widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableRepr")]
pub struct Table {
    /// Declared row count
    pub rows: i32,

    /// Declared column count
    pub columns: i32,

    /// Cell grid in row-major order
    pub cells: Vec<Vec<String>>,
}

impl Table {
    /// Create a table filled with `"Cell i,j"` placeholders.
    pub fn new(rows: i32, columns: i32) -> Self {
        Self {
            rows,
            columns,
            cells: placeholder_grid(rows, columns),
        }
    }

    /// Create a table from explicit cell values.
    ///
    /// The declared dimensions come from the number of rows and the width of
    /// the first row.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self {
            rows: cells.len() as i32,
            columns: cells.first().map(|r| r.len()).unwrap_or(0) as i32,
            cells,
        }
    }

    /// Get the number of rows actually present in the grid.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().flatten().map(String::as_str)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Table] {}x{}", self.rows, self.columns)
    }
}

fn placeholder_grid(rows: i32, columns: i32) -> Vec<Vec<String>> {
    (0..rows.max(0))
        .map(|i| (0..columns.max(0)).map(|j| format!("Cell {},{}", i, j)).collect())
        .collect()
}

/// Wire form of a table; `cells` may be omitted to get placeholders.
#[derive(Deserialize)]
struct TableRepr {
    #[serde(default)]
    rows: i32,
    #[serde(default)]
    columns: i32,
    cells: Option<Vec<Vec<String>>>,
}

impl From<TableRepr> for Table {
    fn from(repr: TableRepr) -> Self {
        match repr.cells {
            Some(cells) => Self {
                rows: repr.rows,
                columns: repr.columns,
                cells,
            },
            None => Self::new(repr.rows, repr.columns),
        }
    }
}
