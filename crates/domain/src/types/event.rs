//! Public event configuration served to kiosks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::EventSettings;

/// Colours and font used by kiosk and admin clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBranding {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Default for EventBranding {
    fn default() -> Self {
        Self {
            primary_color: "#0082C8".to_string(),
            secondary_color: "#1B2A5B".to_string(),
            background_color: "#0F1629".to_string(),
            text_color: "#FFFFFF".to_string(),
            font_family: "Nunito".to_string(),
            logo_url: None,
        }
    }
}

/// A conference day with its localised tab label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDay {
    pub date: String,
    #[serde(default)]
    pub label: BTreeMap<String, String>,
}

/// Event configuration without secrets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEventConfig {
    pub slug: String,
    pub name: String,
    pub timezone: String,
    pub languages: Vec<String>,
    pub default_language: String,
    pub branding: EventBranding,
    pub days: Vec<EventDay>,
}

impl From<&EventSettings> for PublicEventConfig {
    fn from(settings: &EventSettings) -> Self {
        Self {
            slug: settings.slug.clone(),
            name: settings.name.clone(),
            timezone: settings.timezone.clone(),
            languages: settings.languages.clone(),
            default_language: settings.default_language.clone(),
            branding: settings.branding.clone(),
            days: settings.days.clone(),
        }
    }
}
