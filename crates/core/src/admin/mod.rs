//! Admin-managed records
//!
//! Sponsors, sponsor tiers, floor maps and translation overrides are plain
//! keyed records. Core only defines the storage port and listing order.

pub mod ports;

use std::cmp::Ordering;

use ziggy_domain::AdminRecord;

pub use ports::RecordStore;

/// Order records the way listings return them: `sort_order`, then id
pub fn sort_records<T: AdminRecord>(records: &mut [T]) {
    records.sort_by(compare_records);
}

fn compare_records<T: AdminRecord>(a: &T, b: &T) -> Ordering {
    a.sort_order().cmp(&b.sort_order()).then_with(|| a.id().cmp(b.id()))
}
