//! Tabular record extraction
//!
//! Turns a [`Grid`] into a [`NormalizedRecord`]. Two layouts are tried in
//! order: the vertical key/value layout, then (only when no component name
//! was found) the tabular header + data row layout.
//!
//! Extraction never fails. An empty `component_name` on the result means the
//! sheet did not describe a component, and callers must report that.

mod tabular;
mod vertical;

pub use tabular::HEADER_SEARCH_ROWS;
pub use vertical::DEFAULT_PROPERTY_TYPE;

use crate::grid::Grid;
use crate::record::NormalizedRecord;
use tracing::debug;

/// Rows of the source sheet carried on the record as prompt context
pub const SOURCE_EXCERPT_ROWS: usize = 20;

/// Extract a component record from a grid
pub fn extract(grid: &Grid) -> NormalizedRecord {
    let mut record = vertical::scan(grid);

    if !record.has_name() {
        debug!("No component name in vertical layout, trying tabular layout");
        if let Some(row) = tabular::scan(grid) {
            row.merge_into(&mut record);
        }
    }

    record.source_excerpt = grid.excerpt(SOURCE_EXCERPT_ROWS);

    debug!(
        "Extracted component {:?} with {} properties, {} features, {} examples",
        record.component_name,
        record.properties.len(),
        record.features.len(),
        record.examples.len()
    );

    record
}
