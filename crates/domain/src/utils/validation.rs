//! Ingestion checks for upstream agenda items
//!
//! Agenda grouping and the now-window compare start/end instants and
//! time-group labels as plain strings. That is only ordered correctly when
//! every value has the same zero-padded, fixed-width shape, so items are
//! checked once when they arrive and rejected as `MalformedData` otherwise.
//! Instants carrying a UTC offset or `Z` are rejected for the same reason.

use chrono::{NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

use crate::constants::{LOCAL_INSTANT_FORMAT, LOCAL_INSTANT_LEN};
use crate::types::RawAgendaItem;
use crate::{Result, ZiggyError};

const LOCAL_INSTANT_SHAPE: &[u8; LOCAL_INSTANT_LEN] = b"0000-00-00T00:00:00";
const TIME_GROUP_SHAPE: &[u8; 5] = b"00:00";

/// Byte-wise shape check where `0` in `shape` stands for any ASCII digit
fn matches_shape(value: &str, shape: &[u8]) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape).all(|(b, &s)| if s == b'0' { b.is_ascii_digit() } else { b == s })
}

/// `YYYY-MM-DDTHH:MM:SS` with valid calendar and clock values
pub fn is_local_instant(value: &str) -> bool {
    matches_shape(value, LOCAL_INSTANT_SHAPE)
        && NaiveDateTime::parse_from_str(value, LOCAL_INSTANT_FORMAT).is_ok()
}

/// Zero-padded `HH:MM`
pub fn is_time_group_label(value: &str) -> bool {
    matches_shape(value, TIME_GROUP_SHAPE) && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

/// Check every item before it is cached or grouped
///
/// # Errors
/// Returns `ZiggyError::MalformedData` naming the first offending item when
/// a start/end instant or time-group label has the wrong shape, an item
/// ends before it starts, or its time zone is unknown.
pub fn validate_agenda_items(items: &[RawAgendaItem]) -> Result<()> {
    items.iter().try_for_each(validate_item)
}

fn validate_item(item: &RawAgendaItem) -> Result<()> {
    let malformed = |what: &str, value: &str| {
        ZiggyError::MalformedData(format!("agenda item {} has invalid {what}: {value:?}", item.id))
    };

    if !is_local_instant(&item.start_date) {
        return Err(malformed("startDate", &item.start_date));
    }
    if !is_local_instant(&item.end_date) {
        return Err(malformed("endDate", &item.end_date));
    }
    if item.end_date < item.start_date {
        return Err(malformed("endDate (before startDate)", &item.end_date));
    }
    if !is_time_group_label(&item.start_time_group) {
        return Err(malformed("startTimeGroup", &item.start_time_group));
    }
    if item.time_zone.parse::<Tz>().is_err() {
        return Err(malformed("timeZone", &item.time_zone));
    }
    Ok(())
}
