//! Declarative descriptions of where guest data lives in the workbook.
//!
//! Row and column indices are 0-based and absolute: row 0 is sheet row 1 and
//! column 0 is column A.

/// Sheet holding the bride's side of the guest list.
pub const CORINE_SHEET: &str = "Corine";
/// Sheet holding the groom's side of the guest list.
pub const ISAAC_SHEET: &str = "Isaac";
/// Sheet holding the parents' couples list.
pub const PARENTS_SHEET: &str = "Parents 1";

/// Columns holding one guest list within a two-column sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGroup {
    pub name_col: usize,
    pub plus_one_col: usize,
    pub flag_col: usize,
}

impl ColumnGroup {
    pub const fn new(name_col: usize, plus_one_col: usize, flag_col: usize) -> Self {
        Self {
            name_col,
            plus_one_col,
            flag_col,
        }
    }

    /// Highest column index the group reads. A row must reach it for the group
    /// to be considered.
    pub fn last_col(&self) -> usize {
        self.name_col.max(self.plus_one_col).max(self.flag_col)
    }
}

/// Shape of a guest sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutKind {
    /// Independent guest lists side by side in the same rows.
    TwoColumn {
        /// Row carrying the column titles. Only reported, never parsed.
        header_row: usize,
        data_start_row: usize,
        groups: Vec<ColumnGroup>,
    },
    /// One couple per row with an optional explicit headcount.
    Parents {
        data_start_row: usize,
        headcount_col: usize,
        name_col: usize,
    },
}

/// Binds a layout to the sheet it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub kind: LayoutKind,
}

impl SheetLayout {
    pub fn two_column(
        sheet_name: impl Into<String>,
        header_row: usize,
        data_start_row: usize,
        groups: Vec<ColumnGroup>,
    ) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            kind: LayoutKind::TwoColumn {
                header_row,
                data_start_row,
                groups,
            },
        }
    }

    pub fn parents(
        sheet_name: impl Into<String>,
        data_start_row: usize,
        headcount_col: usize,
        name_col: usize,
    ) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            kind: LayoutKind::Parents {
                data_start_row,
                headcount_col,
                name_col,
            },
        }
    }
}

/// Ordered list of sheets to read. Processing order decides which duplicate
/// entry survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookLayout {
    pub sheets: Vec<SheetLayout>,
}

impl WorkbookLayout {
    pub fn new(sheets: Vec<SheetLayout>) -> Self {
        Self { sheets }
    }
}

/// Left list in C/D/E, right list in G/H/I.
fn side_by_side_groups() -> Vec<ColumnGroup> {
    vec![ColumnGroup::new(2, 3, 4), ColumnGroup::new(6, 7, 8)]
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self::new(vec![
            SheetLayout::two_column(CORINE_SHEET, 2, 4, side_by_side_groups()),
            SheetLayout::two_column(ISAAC_SHEET, 1, 3, side_by_side_groups()),
            SheetLayout::parents(PARENTS_SHEET, 1, 1, 2),
        ])
    }
}
