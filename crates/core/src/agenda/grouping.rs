//! Agenda grouping
//!
//! Flat items are partitioned by the date prefix of their start instant and
//! then by their display time-group label. Both keys are zero-padded strings,
//! so ordered maps give ascending days and timeslots without any parsing.

use std::collections::BTreeMap;

use ziggy_domain::{Agenda, AgendaDay, AgendaSession, AgendaTimeslot, RawAgendaItem};

type DayGroups<'a> = BTreeMap<&'a str, BTreeMap<&'a str, Vec<&'a RawAgendaItem>>>;

/// Build the day → timeslot → session structure for one event
///
/// - Days ascend by date, timeslots ascend by label.
/// - A timeslot spans the earliest start and the latest end of all its
///   members, whatever their kind.
/// - Only `Session` items appear as sessions, in upstream order. A slot made
///   up of other kinds is kept with an empty session list.
///
/// Items are expected to have passed ingestion validation.
pub fn build_agenda(items: &[RawAgendaItem]) -> Agenda {
    let mut days: DayGroups<'_> = BTreeMap::new();
    for item in items {
        days.entry(item.date_key())
            .or_default()
            .entry(item.start_time_group.as_str())
            .or_default()
            .push(item);
    }

    let days = days
        .into_iter()
        .map(|(date, groups)| AgendaDay {
            date: date.to_string(),
            timeslots: groups
                .into_iter()
                .map(|(label, members)| build_timeslot(label, &members))
                .collect(),
        })
        .collect();

    Agenda { days }
}

fn build_timeslot(label: &str, members: &[&RawAgendaItem]) -> AgendaTimeslot {
    let start_date = members.iter().map(|item| item.start_date.as_str()).min().unwrap_or_default();
    let end_date = members.iter().map(|item| item.end_date.as_str()).max().unwrap_or_default();

    AgendaTimeslot {
        start_time_group: label.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        sessions: members
            .iter()
            .filter(|item| item.is_session())
            .map(|item| AgendaSession::from(*item))
            .collect(),
    }
}
