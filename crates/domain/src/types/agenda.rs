//! Agenda types
//!
//! `RawAgendaItem` is one flat record as delivered by the events provider.
//! `Agenda` is the grouped day → timeslot → session structure served to
//! kiosks, and `NowView` the request-time split into running and next
//! sessions.
//!
//! Start and end instants are naive local-time strings
//! (`YYYY-MM-DDTHH:MM:SS`) and are compared lexically. See
//! [`crate::utils::validation`] for the ingestion check that keeps that sound.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DATE_PREFIX_LEN;

/// Kind of a schedule element
///
/// Only `Session` items are shown as sessions. Anything the provider adds
/// later decodes as `Other` and is handled like a `NonContentBlock`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Session,
    NonContentBlock,
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Session => "Session",
            Self::NonContentBlock => "NonContentBlock",
            Self::Other(kind) => kind,
        }
    }
}

impl From<String> for ElementKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Session" => Self::Session,
            "NonContentBlock" => Self::NonContentBlock,
            _ => Self::Other(value),
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speaker as embedded in an agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRef {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Track or topic label attached to an agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLabel {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub show_in_element: bool,
}

/// One flat schedule record from the events provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgendaItem {
    pub id: i64,
    pub unique_id: String,
    pub element_type: ElementKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub room_name: String,
    pub room_id: i64,
    /// Naive local start, `YYYY-MM-DDTHH:MM:SS`
    pub start_date: String,
    /// Naive local end, `YYYY-MM-DDTHH:MM:SS`
    pub end_date: String,
    /// Display bucket label, zero-padded `HH:MM`
    pub start_time_group: String,
    /// IANA zone name the local instants are expressed in
    pub time_zone: String,
    #[serde(default)]
    pub speakers: Vec<SpeakerRef>,
    #[serde(default)]
    pub labels: Vec<SessionLabel>,
}

impl RawAgendaItem {
    pub fn is_session(&self) -> bool {
        self.element_type == ElementKind::Session
    }

    /// Calendar date portion of the start instant (`YYYY-MM-DD`)
    pub fn date_key(&self) -> &str {
        self.start_date.get(..DATE_PREFIX_LEN).unwrap_or(&self.start_date)
    }
}

/// A Session-kind item as placed in the agenda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaSession {
    pub id: i64,
    pub unique_id: String,
    pub element_type: ElementKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub room_name: String,
    pub room_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub start_time_group: String,
    pub speakers: Vec<SpeakerRef>,
    pub labels: Vec<SessionLabel>,
}

impl From<&RawAgendaItem> for AgendaSession {
    fn from(item: &RawAgendaItem) -> Self {
        Self {
            id: item.id,
            unique_id: item.unique_id.clone(),
            element_type: item.element_type.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            room_name: item.room_name.clone(),
            room_id: item.room_id,
            start_date: item.start_date.clone(),
            end_date: item.end_date.clone(),
            start_time_group: item.start_time_group.clone(),
            speakers: item.speakers.clone(),
            labels: item.labels.clone(),
        }
    }
}

/// Items sharing one time-group label on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaTimeslot {
    pub start_time_group: String,
    /// Earliest start among all member items
    pub start_date: String,
    /// Latest end among all member items
    pub end_date: String,
    pub sessions: Vec<AgendaSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDay {
    pub date: String,
    pub timeslots: Vec<AgendaTimeslot>,
}

/// Structured schedule for one event, days in ascending date order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agenda {
    pub days: Vec<AgendaDay>,
}

impl Agenda {
    pub fn session_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| &day.timeslots)
            .map(|slot| slot.sessions.len())
            .sum()
    }
}

/// Sessions running now and those in the nearest upcoming timeslot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowView {
    pub current: Vec<AgendaSession>,
    pub up_next: Vec<AgendaSession>,
}
