//! Two-dimensional cell grid read from a spreadsheet-like source

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
}

impl Cell {
    /// Trimmed cell text, or `None` when the cell is empty or blank
    pub fn value(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
        }
    }

    /// Trimmed cell text, empty string when absent
    pub fn text(&self) -> &str {
        self.value().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_none()
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        if text.is_empty() { Cell::Empty } else { Cell::Text(text.to_string()) }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        if text.is_empty() { Cell::Empty } else { Cell::Text(text) }
    }
}

/// Ordered rows of cells. Trailing empty cells are dropped from every row,
/// so a row's length is the position of its last non-empty cell plus one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                while row.last().is_some_and(Cell::is_empty) {
                    row.pop();
                }
                row
            })
            .collect();

        Self { rows }
    }

    /// Build a grid from string literals, `""` meaning an empty cell
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(|cell| Cell::from(cell.as_ref())).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `limit` rows as optional strings, for use as prompt context
    pub fn excerpt(&self, limit: usize) -> Vec<Vec<Option<String>>> {
        self.rows
            .iter()
            .take(limit)
            .map(|row| row.iter().map(|cell| cell.value().map(str::to_string)).collect())
            .collect()
    }
}

/// Cell at `index`, treating out-of-range positions as empty
pub fn cell_at(row: &[Cell], index: usize) -> Option<&str> {
    row.get(index).and_then(Cell::value)
}
