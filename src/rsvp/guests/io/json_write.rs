use std::fs;
use std::path::Path;

use crate::rsvp::guests::error::Result;
use crate::rsvp::guests::model::GuestRecord;

/// Renders the guest list as a pretty-printed JSON array.
pub fn render_guests(guests: &[GuestRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(guests)?)
}

/// Replaces the file at `path` with the rendered guest list.
///
/// The document is rendered before the file is touched, so a serialization
/// failure leaves any previous artifact in place.
pub fn write_guests(path: &Path, guests: &[GuestRecord]) -> Result<()> {
    let json = render_guests(guests)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}
