//! Loading a [`Grid`] from spreadsheet files
//!
//! `.csv` files go through the `csv` reader and expose a single sheet named
//! `Sheet1`. Everything else (xlsx, xlsm, xlsb, xls, ods) is opened with
//! calamine.

use crate::grid::{Cell, Grid};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Sheet name reported for CSV input
pub const CSV_SHEET_NAME: &str = "Sheet1";

/// Errors raised while reading the tabular input file
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Sheet \"{sheet}\" not found (available: {})", available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Workbook contains no sheets: {}", path.display())]
    NoSheets { path: PathBuf },

    #[error("Failed to read workbook: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read one sheet of `path` into a grid. Without `sheet`, the first sheet
/// is used.
pub fn load_grid(path: &Path, sheet: Option<&str>) -> Result<Grid, WorkbookError> {
    if !path.exists() {
        return Err(WorkbookError::NotFound { path: path.to_path_buf() });
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv { load_csv(path, sheet) } else { load_spreadsheet(path, sheet) }
}

fn load_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Grid, WorkbookError> {
    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names();

    let target = match sheet {
        Some(name) => {
            if !available.iter().any(|candidate| candidate == name) {
                return Err(WorkbookError::SheetNotFound { sheet: name.to_string(), available });
            }
            name.to_string()
        }
        None => available
            .first()
            .cloned()
            .ok_or_else(|| WorkbookError::NoSheets { path: path.to_path_buf() })?,
    };

    debug!("Reading sheet {:?} from {}", target, path.display());
    let range = workbook.worksheet_range(&target)?;

    let rows = range.rows().map(|row| row.iter().map(convert_cell).collect()).collect();
    Ok(Grid::new(rows))
}

fn load_csv(path: &Path, sheet: Option<&str>) -> Result<Grid, WorkbookError> {
    if let Some(name) = sheet {
        if name != CSV_SHEET_NAME {
            return Err(WorkbookError::SheetNotFound {
                sheet: name.to_string(),
                available: vec![CSV_SHEET_NAME.to_string()],
            });
        }
    }

    let mut reader =
        csv::ReaderBuilder::new().has_headers(false).flexible(true).from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::from).collect());
    }

    debug!("Read {} CSV rows from {}", rows.len(), path.display());
    Ok(Grid::new(rows))
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(text) => Cell::from(text.as_str()),
        // Numbers, booleans, dates and error values use their display form
        other => Cell::from(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn write_xlsx(dir: &Path) -> PathBuf {
        let path = dir.join("components.xlsx");
        let mut workbook = Workbook::new();

        let first = workbook.add_worksheet();
        first.set_name("Overview").unwrap();
        first.write_string(0, 0, "memo").unwrap();

        let second = workbook.add_worksheet();
        second.set_name("DatePicker").unwrap();
        second.write_string(0, 0, "コンポーネント名").unwrap();
        second.write_string(0, 1, "DatePicker").unwrap();
        second.write_string(1, 0, "## プロパティ").unwrap();
        second.write_string(2, 0, "maxLength").unwrap();
        second.write_string(2, 1, "number").unwrap();
        second.write_number(2, 2, 10).unwrap();

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        let err = load_grid(Path::new("/definitely/not/here.xlsx"), None).unwrap_err();
        assert!(matches!(err, WorkbookError::NotFound { .. }));
    }

    #[test]
    fn test_xlsx_first_sheet_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_xlsx(temp_dir.path());

        let grid = load_grid(&path, None).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.rows()[0][0].value(), Some("memo"));
    }

    #[test]
    fn test_xlsx_named_sheet_and_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_xlsx(temp_dir.path());

        let grid = load_grid(&path, Some("DatePicker")).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.rows()[0][1].value(), Some("DatePicker"));
        assert_eq!(grid.rows()[2][2].value(), Some("10"));
    }

    #[test]
    fn test_xlsx_missing_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_xlsx(temp_dir.path());

        match load_grid(&path, Some("Nope")) {
            Err(WorkbookError::SheetNotFound { sheet, available }) => {
                assert_eq!(sheet, "Nope");
                assert_eq!(available, vec!["Overview".to_string(), "DatePicker".to_string()]);
            }
            other => panic!("expected SheetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_rows_are_flexible() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spec.csv");
        std::fs::write(&path, "Name,Spinner\n## Props\nstep,number,1,increment,\n").unwrap();

        let grid = load_grid(&path, None).unwrap();
        let names: Vec<&str> = grid.rows().iter().map(|row| row.first().map_or("", Cell::text)).collect();
        assert_eq!(names, vec!["Name", "## Props", "step"]);
        assert_eq!(grid.rows()[2].len(), 4);
    }

    #[test]
    fn test_csv_sheet_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spec.csv");
        std::fs::write(&path, "Name,Spinner\n").unwrap();

        assert!(load_grid(&path, Some(CSV_SHEET_NAME)).is_ok());
        assert!(matches!(
            load_grid(&path, Some("Other")),
            Err(WorkbookError::SheetNotFound { .. })
        ));
    }
}
