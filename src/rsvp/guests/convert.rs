use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::rsvp::guests::dedup::dedupe_guests;
use crate::rsvp::guests::enrich::enrich_guests;
use crate::rsvp::guests::error::Result;
use crate::rsvp::guests::extract::extract_sheet;
use crate::rsvp::guests::io::json_write;
use crate::rsvp::guests::io::workbook_read::GuestWorkbook;
use crate::rsvp::guests::layout::WorkbookLayout;
use crate::rsvp::guests::model::{GuestRecord, SheetGrid};

/// Workbook read when no input is given.
pub const DEFAULT_INPUT: &str = "Wedding - List_and_Pre-Wed -vWebsite.xlsx";
/// Guest list written when no output is given.
pub const DEFAULT_OUTPUT: &str = "data/guests.json";

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: WorkbookLayout,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: WorkbookLayout::default(),
        }
    }
}

/// Builds the published guest list from the sheets named by `layout`.
///
/// `load_sheet` returns `Ok(None)` for sheets the workbook does not contain;
/// those contribute no guests.
pub fn build_guest_list<F>(layout: &WorkbookLayout, mut load_sheet: F) -> Result<Vec<GuestRecord>>
where
    F: FnMut(&str) -> Result<Option<SheetGrid>>,
{
    let mut extracted = Vec::new();
    for sheet in &layout.sheets {
        match load_sheet(&sheet.sheet_name)? {
            Some(grid) => extracted.extend(extract_sheet(&grid, sheet)),
            None => debug!(sheet = %sheet.sheet_name, "skipping absent sheet"),
        }
    }
    info!(guest_count = extracted.len(), "extracted guest rows");

    let unique = dedupe_guests(extracted);
    info!(guest_count = unique.len(), "deduplicated guests");

    Ok(enrich_guests(unique))
}

/// Converts the configured workbook into the JSON guest list.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %config.input.display(), output = %config.output.display())
)]
pub fn convert_workbook(config: &ConvertConfig) -> Result<Vec<GuestRecord>> {
    let mut workbook = GuestWorkbook::open(&config.input)?;
    debug!(sheets = ?workbook.sheet_names(), "opened workbook");

    let guests = build_guest_list(&config.layout, |name| workbook.sheet(name))?;
    json_write::write_guests(&config.output, &guests)?;
    info!(guest_count = guests.len(), "guest list written");
    Ok(guests)
}
