//! Now-window computation
//!
//! "Now" is rendered as a naive local-time string in the event's zone and
//! compared lexically against item start/end strings. The zone travels with
//! the data: it is read from the first item, and only an empty list falls
//! back to a configured default.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use ziggy_domain::constants::LOCAL_INSTANT_FORMAT;
use ziggy_domain::{AgendaSession, NowView, RawAgendaItem, Result, ZiggyError};

/// Render `now` as `YYYY-MM-DDTHH:MM:SS` local time in `zone`
pub fn local_now(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format(LOCAL_INSTANT_FORMAT).to_string()
}

/// Zone the items are expressed in, or `fallback` when there are none
///
/// # Errors
/// Returns `ZiggyError::MalformedData` if the first item names an unknown
/// zone.
pub fn event_zone(items: &[RawAgendaItem], fallback: Tz) -> Result<Tz> {
    match items.first() {
        None => Ok(fallback),
        Some(first) => first.time_zone.parse::<Tz>().map_err(|_| {
            ZiggyError::MalformedData(format!("unknown time zone: {:?}", first.time_zone))
        }),
    }
}

/// Split items into running sessions and the nearest upcoming timeslot
///
/// # Errors
/// Returns `ZiggyError::MalformedData` if the event zone cannot be resolved.
pub fn compute_now_view(
    items: &[RawAgendaItem],
    now: DateTime<Utc>,
    fallback: Tz,
) -> Result<NowView> {
    let zone = event_zone(items, fallback)?;
    Ok(now_view_at(items, &local_now(now, zone)))
}

/// Lexical core of [`compute_now_view`] for an already-localised "now"
///
/// - `current`: sessions with `start <= now < end`, in upstream order.
/// - `up_next`: every upcoming session in the same timeslot (date and
///   time-group label) as the earliest upcoming one, sorted by start.
///
/// A session is never in both lists because `current` requires
/// `start <= now` and upcoming requires `start > now`.
pub fn now_view_at(items: &[RawAgendaItem], now_local: &str) -> NowView {
    let sessions = items.iter().filter(|item| item.is_session());

    let current = sessions
        .clone()
        .filter(|item| item.start_date.as_str() <= now_local && now_local < item.end_date.as_str())
        .map(AgendaSession::from)
        .collect();

    let mut upcoming: Vec<&RawAgendaItem> =
        sessions.filter(|item| item.start_date.as_str() > now_local).collect();
    upcoming.sort_by(|a, b| a.start_date.cmp(&b.start_date));

    let up_next = match upcoming.first() {
        None => Vec::new(),
        Some(first) => upcoming
            .iter()
            .filter(|item| {
                item.date_key() == first.date_key()
                    && item.start_time_group == first.start_time_group
            })
            .map(|item| AgendaSession::from(*item))
            .collect(),
    };

    NowView { current, up_next }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ziggy_domain::ElementKind;

    use super::*;

    fn session(id: i64, start: &str, end: &str, group: &str) -> RawAgendaItem {
        RawAgendaItem {
            id,
            unique_id: format!("u{id}"),
            element_type: ElementKind::Session,
            title: format!("Session {id}"),
            description: None,
            room_name: "Zaal 1".into(),
            room_id: 1,
            start_date: start.into(),
            end_date: end.into(),
            start_time_group: group.into(),
            time_zone: "Europe/Amsterdam".into(),
            speakers: vec![],
            labels: vec![],
        }
    }

    fn ids(sessions: &[AgendaSession]) -> Vec<i64> {
        sessions.iter().map(|s| s.id).collect()
    }

    #[test]
    fn local_now_uses_event_zone() {
        // 06:45 UTC is 08:45 in Amsterdam during summer time
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 6, 45, 0).unwrap();

        assert_eq!(local_now(now, chrono_tz::Europe::Amsterdam), "2026-06-01T08:45:00");
        assert_eq!(local_now(now, chrono_tz::UTC), "2026-06-01T06:45:00");
    }

    #[test]
    fn zone_comes_from_first_item() {
        let mut item = session(1, "2026-06-01T08:30:00", "2026-06-01T09:00:00", "08:30");
        item.time_zone = "America/New_York".into();

        let zone = event_zone(&[item], chrono_tz::Europe::Amsterdam).unwrap();

        assert_eq!(zone, chrono_tz::America::New_York);
        assert_eq!(event_zone(&[], chrono_tz::UTC).unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn unknown_zone_is_malformed() {
        let mut item = session(1, "2026-06-01T08:30:00", "2026-06-01T09:00:00", "08:30");
        item.time_zone = "Atlantis/Capital".into();

        let result = compute_now_view(&[item], Utc::now(), chrono_tz::UTC);

        assert!(matches!(result, Err(ZiggyError::MalformedData(_))));
    }

    #[test]
    fn start_is_inclusive_and_end_is_exclusive() {
        let items = vec![session(1, "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30")];

        assert_eq!(ids(&now_view_at(&items, "2026-06-01T08:30:00").current), [1]);
        assert!(now_view_at(&items, "2026-06-01T09:15:00").current.is_empty());
    }

    #[test]
    fn up_next_takes_the_whole_nearest_timeslot() {
        let items = vec![
            session(1, "2026-06-01T10:00:00", "2026-06-01T10:45:00", "10:00"),
            session(2, "2026-06-01T09:35:00", "2026-06-01T10:00:00", "09:30"),
            session(3, "2026-06-01T09:30:00", "2026-06-01T10:00:00", "09:30"),
        ];

        let view = now_view_at(&items, "2026-06-01T09:00:00");

        assert_eq!(ids(&view.up_next), [3, 2]);
    }

    #[test]
    fn up_next_ignores_same_label_on_a_later_day() {
        let items = vec![
            session(1, "2026-06-01T09:30:00", "2026-06-01T10:00:00", "09:30"),
            session(2, "2026-06-02T09:30:00", "2026-06-02T10:00:00", "09:30"),
        ];

        let view = now_view_at(&items, "2026-06-01T09:00:00");

        assert_eq!(ids(&view.up_next), [1]);
    }

    #[test]
    fn non_sessions_are_never_current_or_next() {
        let mut lunch = session(9, "2026-06-01T12:00:00", "2026-06-01T13:00:00", "12:00");
        lunch.element_type = ElementKind::NonContentBlock;
        let mut coffee = session(8, "2026-06-01T13:00:00", "2026-06-01T13:15:00", "13:00");
        coffee.element_type = ElementKind::NonContentBlock;

        let view = now_view_at(&[lunch, coffee], "2026-06-01T12:30:00");

        assert!(view.current.is_empty());
        assert!(view.up_next.is_empty());
    }

    #[test]
    fn after_the_event_both_lists_are_empty() {
        let items = vec![session(1, "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30")];

        assert_eq!(now_view_at(&items, "2026-06-02T08:00:00"), NowView::default());
    }
}
