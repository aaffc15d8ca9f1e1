use serde::{Deserialize, Serialize};

/// A single spreadsheet cell as seen by the extractors.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell.
    #[default]
    Empty,
    /// Text cell. Dates, durations, and error cells are carried in their
    /// display form.
    Text(String),
    /// Integer cell.
    Int(i64),
    /// Floating point cell.
    Float(f64),
    /// Boolean cell.
    Bool(bool),
}

impl CellValue {
    /// Returns the display string of the cell, `""` for blanks.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(value) => value.clone(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => value.to_string(),
            CellValue::Bool(value) => value.to_string(),
        }
    }

    /// Whether the cell holds a meaningful value: blanks, empty text, zero, and
    /// `false` are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(value) => !value.is_empty(),
            CellValue::Int(value) => *value != 0,
            CellValue::Float(value) => *value != 0.0,
            CellValue::Bool(value) => *value,
        }
    }

    /// Best-effort integer interpretation of the cell.
    ///
    /// Floats are truncated toward zero, booleans count as 0/1, and text must be
    /// a base-10 integer once surrounding whitespace is removed.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            CellValue::Empty => None,
            CellValue::Int(value) => Some(*value),
            CellValue::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            CellValue::Float(_) => None,
            CellValue::Bool(value) => Some(i64::from(*value)),
            CellValue::Text(value) => value.trim().parse().ok(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// Row-major cell grid anchored at cell A1 of its sheet.
///
/// Row index 0 is sheet row 1 and column index 0 is column A. Rows may differ
/// in length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Creates a grid from already-anchored rows.
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Iterates the rows starting at `start` in order.
    pub fn rows_from(&self, start: usize) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().skip(start).map(Vec::as_slice)
    }
}

/// A guest entry as read from one sheet row, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGuestRecord {
    /// Trimmed guest name.
    pub name: String,
    /// Whether the entry may bring a plus-one.
    pub plus_one_allowed: bool,
    /// Whether the entry is invited to the pre-wedding event.
    pub pre_wedding_invited: bool,
    /// Number of attendees the entry represents, at least 1.
    pub headcount: u32,
}

impl RawGuestRecord {
    /// Case-folded name, used as the identity of the guest.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A guest entry in the published guest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    /// 1-based position in the published list.
    pub id: u32,
    pub name: String,
    pub name_lower: String,
    pub first_name_metaphone: String,
    pub last_name_metaphone: String,
    pub plus_one_allowed: bool,
    pub pre_wedding_invited: bool,
    pub headcount: u32,
}
