//! Tabular layout: a header row naming the columns, followed by exactly one
//! data row. Additional data rows are not read.

use crate::grid::{Cell, Grid, cell_at};
use crate::record::NormalizedRecord;
use regex::Regex;
use regex_utils::headers;

/// Only the leading rows are searched for a header row
pub const HEADER_SEARCH_ROWS: usize = 10;

/// Values copied from the data row under the header
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct TabularRow {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl TabularRow {
    /// Copy present values over the record; absent ones leave it untouched
    pub fn merge_into(self, record: &mut NormalizedRecord) {
        if let Some(name) = self.name {
            record.component_name = name;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(category) = self.category {
            record.category = Some(category);
        }
    }
}

pub(crate) fn scan(grid: &Grid) -> Option<TabularRow> {
    let header_index = grid
        .rows()
        .iter()
        .take(HEADER_SEARCH_ROWS)
        .position(|row| row.iter().any(|cell| headers::COMPONENT.is_match(cell.text())))?;

    let header = &grid.rows()[header_index];
    let name_column = column_of(header, &headers::COMPONENT);
    let description_column = column_of(header, &headers::DESCRIPTION);
    let category_column = column_of(header, &headers::CATEGORY);

    let Some(data_row) = grid.row(header_index + 1) else {
        return Some(TabularRow::default());
    };

    let read = |column: Option<usize>| {
        column.and_then(|index| cell_at(data_row, index)).map(str::to_string)
    };

    Some(TabularRow {
        name: read(name_column),
        description: read(description_column),
        category: read(category_column),
    })
}

fn column_of(header: &[Cell], pattern: &Regex) -> Option<usize> {
    header.iter().position(|cell| pattern.is_match(cell.text()))
}
