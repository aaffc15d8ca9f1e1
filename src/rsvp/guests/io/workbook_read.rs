use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::debug;

use crate::rsvp::guests::error::{GuestError, Result};
use crate::rsvp::guests::model::{CellValue, SheetGrid};

/// Opened guest workbook exposing its sheets as [`SheetGrid`]s.
pub struct GuestWorkbook<R> {
    workbook: Xlsx<R>,
}

impl GuestWorkbook<std::io::BufReader<std::fs::File>> {
    /// Opens an `.xlsx` workbook from disk.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GuestError::MissingInput(path.to_path_buf()));
        }
        let workbook: Xlsx<_> = open_workbook(path)?;
        Ok(Self { workbook })
    }
}

impl<R: std::io::Read + std::io::Seek> GuestWorkbook<R> {
    /// Names of the sheets in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Reads a sheet as a grid anchored at A1, or `None` when the workbook has
    /// no sheet of that name.
    pub fn sheet(&mut self, name: &str) -> Result<Option<SheetGrid>> {
        let Some(range_result) = self.workbook.worksheet_range(name) else {
            debug!(sheet = name, "sheet not present");
            return Ok(None);
        };
        let range = range_result.map_err(GuestError::from)?;
        Ok(Some(range_to_grid(&range)))
    }
}

/// Pads the stored range with blanks so that grid coordinates are absolute
/// sheet coordinates.
fn range_to_grid(range: &Range<DataType>) -> SheetGrid {
    let Some((start_row, start_col)) = range.start() else {
        return SheetGrid::default();
    };

    let mut rows = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(cell_value));
        rows.push(cells);
    }
    SheetGrid::new(rows)
}

fn cell_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::Empty => CellValue::Empty,
        DataType::String(value) => CellValue::Text(value.clone()),
        DataType::Int(value) => CellValue::Int(*value),
        DataType::Float(value) => CellValue::Float(*value),
        DataType::Bool(value) => CellValue::Bool(*value),
        other => CellValue::Text(other.to_string()),
    }
}
