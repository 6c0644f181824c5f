//! Domain types and models
//!
//! Upstream payloads are decoded strictly: required fields that are missing
//! fail deserialization instead of falling back to defaults, because silent
//! defaults would corrupt agenda ordering.

pub mod admin;
pub mod agenda;
pub mod event;
pub mod resources;

pub use admin::{
    AdminRecord, DisplaySize, FloorMap, Hotspot, I18nOverrides, LocalizedText, Sponsor,
    SponsorTier,
};
pub use agenda::{
    Agenda, AgendaDay, AgendaSession, AgendaTimeslot, ElementKind, NowView, RawAgendaItem,
    SessionLabel, SpeakerRef,
};
pub use event::{EventBranding, EventDay, PublicEventConfig};
pub use resources::{Booth, Partnership, Speaker, UpstreamId};
