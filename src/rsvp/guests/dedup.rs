use std::collections::HashSet;

use crate::rsvp::guests::model::RawGuestRecord;

/// Keeps the first record seen for each case-folded name, preserving order.
///
/// Later duplicates are dropped whole; their fields are never merged into the
/// surviving record.
pub fn dedupe_guests(guests: impl IntoIterator<Item = RawGuestRecord>) -> Vec<RawGuestRecord> {
    let mut seen = HashSet::new();
    guests
        .into_iter()
        .filter(|guest| seen.insert(guest.name_key()))
        .collect()
}
