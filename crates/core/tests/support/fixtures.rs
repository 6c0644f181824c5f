//! Agenda item fixtures

use ziggy_domain::{ElementKind, RawAgendaItem, SessionLabel, SpeakerRef};

/// A Session item in Amsterdam time
pub fn session(id: i64, start: &str, end: &str, group: &str) -> RawAgendaItem {
    item(id, ElementKind::Session, start, end, group)
}

/// A NonContentBlock item (breaks, lunch, registration)
pub fn block(id: i64, start: &str, end: &str, group: &str) -> RawAgendaItem {
    item(id, ElementKind::NonContentBlock, start, end, group)
}

pub fn item(id: i64, kind: ElementKind, start: &str, end: &str, group: &str) -> RawAgendaItem {
    RawAgendaItem {
        id,
        unique_id: format!("item-{id}"),
        element_type: kind,
        title: format!("Item {id}"),
        description: Some(format!("Description of item {id}")),
        room_name: format!("Zaal {}", id % 3 + 1),
        room_id: id % 3 + 1,
        start_date: start.to_string(),
        end_date: end.to_string(),
        start_time_group: group.to_string(),
        time_zone: "Europe/Amsterdam".to_string(),
        speakers: vec![SpeakerRef {
            id: id * 10,
            name: format!("Speaker {id}"),
            tagline: None,
            company: Some("Contoso".to_string()),
            image: None,
        }],
        labels: vec![SessionLabel {
            id: 1,
            name: "Security".to_string(),
            color: Some("#0082C8".to_string()),
            show_in_element: true,
        }],
    }
}

/// The two-parallel-sessions-then-one morning used throughout the tests
pub fn morning() -> Vec<RawAgendaItem> {
    vec![
        session(1, "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30"),
        session(2, "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30"),
        session(3, "2026-06-01T09:30:00", "2026-06-01T10:00:00", "09:30"),
    ]
}

/// Two conference days with breaks, parallel tracks and uneven durations
pub fn conference() -> Vec<RawAgendaItem> {
    vec![
        block(100, "2026-06-01T08:00:00", "2026-06-01T08:30:00", "08:00"),
        session(1, "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30"),
        session(2, "2026-06-01T08:30:00", "2026-06-01T09:30:00", "08:30"),
        session(3, "2026-06-01T08:35:00", "2026-06-01T09:15:00", "08:30"),
        session(4, "2026-06-01T09:45:00", "2026-06-01T10:30:00", "09:45"),
        block(101, "2026-06-01T12:00:00", "2026-06-01T13:00:00", "12:00"),
        session(5, "2026-06-01T13:00:00", "2026-06-01T13:45:00", "13:00"),
        session(6, "2026-06-01T13:00:00", "2026-06-01T14:00:00", "13:00"),
        session(7, "2026-06-02T09:30:00", "2026-06-02T10:15:00", "09:30"),
        session(8, "2026-06-02T09:30:00", "2026-06-02T10:15:00", "09:30"),
        session(9, "2026-06-02T11:00:00", "2026-06-02T11:45:00", "11:00"),
    ]
}
