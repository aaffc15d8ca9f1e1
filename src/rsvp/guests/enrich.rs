use crate::rsvp::guests::model::{GuestRecord, RawGuestRecord};
use crate::rsvp::guests::phonetic::name_keys;

/// Turns deduplicated guests into the published list.
///
/// Identifiers follow input order starting at 1.
pub fn enrich_guests(guests: Vec<RawGuestRecord>) -> Vec<GuestRecord> {
    (1u32..)
        .zip(guests)
        .map(|(id, guest)| {
            let (first_name_metaphone, last_name_metaphone) = name_keys(&guest.name);
            GuestRecord {
                id,
                name_lower: guest.name_key(),
                first_name_metaphone,
                last_name_metaphone,
                plus_one_allowed: guest.plus_one_allowed,
                pre_wedding_invited: guest.pre_wedding_invited,
                headcount: guest.headcount,
                name: guest.name,
            }
        })
        .collect()
}
