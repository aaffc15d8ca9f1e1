use tracing::debug;

use crate::rsvp::guests::layout::{ColumnGroup, LayoutKind, SheetLayout};
use crate::rsvp::guests::model::{CellValue, RawGuestRecord, SheetGrid};

/// Headcount assumed for a parents entry without a usable count.
pub const DEFAULT_COUPLE_HEADCOUNT: u32 = 2;

/// Name found in summary rows at the bottom of the two-column lists.
const TOTAL_MARKER: &str = "total";

/// Extracts the guests of one sheet according to its layout.
pub fn extract_sheet(grid: &SheetGrid, layout: &SheetLayout) -> Vec<RawGuestRecord> {
    let guests = match &layout.kind {
        LayoutKind::TwoColumn {
            header_row,
            data_start_row,
            groups,
        } => {
            debug!(
                sheet = %layout.sheet_name,
                header_row = header_row + 1,
                data_start_row = data_start_row + 1,
                "reading two-column sheet"
            );
            extract_two_column_sheet(grid, *data_start_row, groups)
        }
        LayoutKind::Parents {
            data_start_row,
            headcount_col,
            name_col,
        } => extract_parents_sheet(grid, *data_start_row, *headcount_col, *name_col),
    };
    debug!(sheet = %layout.sheet_name, guest_count = guests.len(), "sheet extracted");
    guests
}

/// Reads side-by-side guest lists.
///
/// Each row yields up to one record per group, in group order. The first group
/// only needs its name cell; missing count and flag cells read as 0 and "not
/// invited". Later groups are skipped for rows too short to reach all of their
/// columns.
pub fn extract_two_column_sheet(
    grid: &SheetGrid,
    data_start_row: usize,
    groups: &[ColumnGroup],
) -> Vec<RawGuestRecord> {
    let mut guests = Vec::new();

    for row in grid.rows_from(data_start_row) {
        for (index, group) in groups.iter().enumerate() {
            let required_col = if index == 0 {
                group.name_col
            } else {
                group.last_col()
            };
            if row.len() <= required_col {
                continue;
            }
            let Some(name) = guest_name(&row[group.name_col]) else {
                continue;
            };

            let plus_ones = row.get(group.plus_one_col).map_or(0, plus_one_count);
            guests.push(RawGuestRecord {
                name,
                plus_one_allowed: plus_ones >= 1,
                pre_wedding_invited: row.get(group.flag_col).is_some_and(is_yes),
                headcount: plus_ones.saturating_add(1),
            });
        }
    }

    guests
}

/// Reads the parents' list. Every entry is a couple invited to the pre-wedding
/// event without a separate plus-one.
pub fn extract_parents_sheet(
    grid: &SheetGrid,
    data_start_row: usize,
    headcount_col: usize,
    name_col: usize,
) -> Vec<RawGuestRecord> {
    let mut guests = Vec::new();

    for row in grid.rows_from(data_start_row) {
        let Some(name) = row.get(name_col).and_then(guest_name) else {
            continue;
        };

        guests.push(RawGuestRecord {
            name,
            plus_one_allowed: false,
            pre_wedding_invited: true,
            headcount: couple_headcount(row.get(headcount_col)),
        });
    }

    guests
}

/// Trimmed guest name, or `None` for blank cells and summary rows.
fn guest_name(cell: &CellValue) -> Option<String> {
    if !cell.is_truthy() {
        return None;
    }
    let name = cell.as_text().trim().to_string();
    if name.is_empty() || name.eq_ignore_ascii_case(TOTAL_MARKER) {
        return None;
    }
    Some(name)
}

/// Non-numeric and negative counts read as zero.
fn plus_one_count(cell: &CellValue) -> u32 {
    let count = cell.to_int().unwrap_or(0).max(0);
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn is_yes(cell: &CellValue) -> bool {
    cell.as_text().trim().to_uppercase() == "Y"
}

fn couple_headcount(cell: Option<&CellValue>) -> u32 {
    cell.filter(|cell| cell.is_truthy())
        .and_then(CellValue::to_int)
        .filter(|count| *count >= 1)
        .and_then(|count| u32::try_from(count).ok())
        .unwrap_or(DEFAULT_COUPLE_HEADCOUNT)
}
