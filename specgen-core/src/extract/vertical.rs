//! Vertical (key/value) layout: one labelled value per row, with optional
//! `##`/`【` sections. Rows inside a properties section describe properties.

use crate::grid::{Cell, Grid, cell_at};
use crate::record::{NormalizedRecord, PropertySpec};
use regex_utils::labels::{self, LabelField};
use regex_utils::sections;

/// Type assumed for a property row with a blank type column
pub const DEFAULT_PROPERTY_TYPE: &str = "string";

/// Minimum cell count of a property row (name, type, default)
const MIN_PROPERTY_CELLS: usize = 3;

/// Scan state threaded through the rows
#[derive(Debug, Default)]
struct ScanState {
    current_section: String,
}

impl ScanState {
    fn enter_section(&mut self, label: &str) {
        self.current_section = label.to_string();
    }

    fn in_properties(&self) -> bool {
        sections::is_properties(&self.current_section)
    }
}

pub(crate) fn scan(grid: &Grid) -> NormalizedRecord {
    let mut record = NormalizedRecord::default();
    let mut state = ScanState::default();

    for row in grid.rows() {
        if row.is_empty() {
            continue;
        }

        let key = cell_at(row, 0).unwrap_or("");

        if sections::is_header(key) {
            state.enter_section(key);
            continue;
        }

        if let (Some(field), Some(value)) = (labels::classify(key), cell_at(row, 1)) {
            apply_label(&mut record, field, value);
        }

        if state.in_properties() {
            if let Some(property) = property_from_row(key, row) {
                record.properties.push(property);
            }
        }
    }

    record
}

fn apply_label(record: &mut NormalizedRecord, field: LabelField, value: &str) {
    let value = value.to_string();
    match field {
        LabelField::Name => record.component_name = value,
        LabelField::Description => record.description = value,
        LabelField::Category => record.category = Some(value),
        LabelField::Feature => record.features.push(value),
        LabelField::Example => record.examples.push(value),
        LabelField::Note => record.notes = Some(value),
    }
}

fn property_from_row(key: &str, row: &[Cell]) -> Option<PropertySpec> {
    if row.len() < MIN_PROPERTY_CELLS || key.is_empty() || sections::repeats_properties_label(key) {
        return None;
    }

    Some(PropertySpec {
        name: key.to_string(),
        type_name: cell_at(row, 1).unwrap_or(DEFAULT_PROPERTY_TYPE).to_string(),
        default_value: cell_at(row, 2).map(str::to_string),
        description: cell_at(row, 3).map(str::to_string),
    })
}
