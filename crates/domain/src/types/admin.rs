//! Admin-managed records
//!
//! Sponsors, sponsor tiers, floor maps and translation overrides are curated
//! per event through the admin dashboard and read by kiosks. They are stored
//! through the `RecordStore` port; this module only defines their shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text keyed by language code (`nl`, `en`, ...)
pub type LocalizedText = BTreeMap<String, String>;

/// Common surface of every admin record
///
/// Listings are ordered by [`AdminRecord::sort_order`] and then by id.
pub trait AdminRecord: Clone + Send + Sync + 'static {
    /// Human-readable record kind, used in error messages and logs
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn event_slug(&self) -> &str;

    fn sort_order(&self) -> i32 {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub event_slug: String,
    pub name: String,
    pub tier_id: String,
    #[serde(default)]
    pub description: LocalizedText,
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booth_number: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How large sponsors of a tier are rendered on the kiosk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySize {
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorTier {
    pub id: String,
    pub event_slug: String,
    pub name: String,
    #[serde(default)]
    pub label: LocalizedText,
    #[serde(default)]
    pub sort_order: i32,
    pub display_size: DisplaySize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Clickable room area on a floor map
///
/// `points` is a polygon in image-relative coordinates, each axis in `0..=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    pub room_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub label: LocalizedText,
    pub points: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Hotspot {
    /// A polygon needs three corners and every corner inside the image
    pub fn is_valid_polygon(&self) -> bool {
        self.points.len() >= 3
            && self.points.iter().flatten().all(|coord| (0.0..=1.0).contains(coord))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorMap {
    pub id: String,
    pub event_slug: String,
    pub name: String,
    #[serde(default)]
    pub label: LocalizedText,
    pub image_url: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-language UI string overrides for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nOverrides {
    pub id: String,
    pub event_slug: String,
    pub language: String,
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

impl AdminRecord for Sponsor {
    const KIND: &'static str = "sponsor";

    fn id(&self) -> &str {
        &self.id
    }

    fn event_slug(&self) -> &str {
        &self.event_slug
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl AdminRecord for SponsorTier {
    const KIND: &'static str = "sponsor tier";

    fn id(&self) -> &str {
        &self.id
    }

    fn event_slug(&self) -> &str {
        &self.event_slug
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl AdminRecord for FloorMap {
    const KIND: &'static str = "floor map";

    fn id(&self) -> &str {
        &self.id
    }

    fn event_slug(&self) -> &str {
        &self.event_slug
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl AdminRecord for I18nOverrides {
    const KIND: &'static str = "i18n overrides";

    fn id(&self) -> &str {
        &self.id
    }

    fn event_slug(&self) -> &str {
        &self.event_slug
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sponsor_tier_display_size_is_lowercase() {
        let tier: SponsorTier = serde_json::from_value(json!({
            "id": "gold",
            "eventSlug": "demo",
            "name": "Gold",
            "label": { "nl": "Goud", "en": "Gold" },
            "sortOrder": 1,
            "displaySize": "large",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(tier.display_size, DisplaySize::Large);
        assert_eq!(tier.label["nl"], "Goud");
        assert_eq!(AdminRecord::sort_order(&tier), 1);
    }

    #[test]
    fn hotspot_polygon_validation() {
        let mut hotspot = Hotspot {
            id: "h1".into(),
            room_name: "Zaal 1".into(),
            room_id: Some(12),
            label: LocalizedText::new(),
            points: vec![[0.1, 0.1], [0.4, 0.1], [0.4, 0.3]],
            color: None,
        };
        assert!(hotspot.is_valid_polygon());

        hotspot.points.push([1.2, 0.5]);
        assert!(!hotspot.is_valid_polygon());

        hotspot.points.truncate(2);
        assert!(!hotspot.is_valid_polygon());
    }
}
