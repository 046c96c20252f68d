// src/models/site.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::ownership::Owned;

/// The closed set of Malian administrative regions a site can sit in.
/// Stored as the `mali_region` Postgres enum; labels keep their accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "mali_region")]
pub enum Region {
    Kayes,
    Koulikoro,
    Sikasso,
    #[sqlx(rename = "Ségou")]
    #[serde(rename = "Ségou")]
    Segou,
    Mopti,
    Tombouctou,
    Gao,
    Kidal,
    #[sqlx(rename = "Taoudénit")]
    #[serde(rename = "Taoudénit")]
    Taoudenit,
    #[sqlx(rename = "Ménaka")]
    #[serde(rename = "Ménaka")]
    Menaka,
    Bamako,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Region::Kayes,
        Region::Koulikoro,
        Region::Sikasso,
        Region::Segou,
        Region::Mopti,
        Region::Tombouctou,
        Region::Gao,
        Region::Kidal,
        Region::Taoudenit,
        Region::Menaka,
        Region::Bamako,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Kayes => "Kayes",
            Region::Koulikoro => "Koulikoro",
            Region::Sikasso => "Sikasso",
            Region::Segou => "Ségou",
            Region::Mopti => "Mopti",
            Region::Tombouctou => "Tombouctou",
            Region::Gao => "Gao",
            Region::Kidal => "Kidal",
            Region::Taoudenit => "Taoudénit",
            Region::Menaka => "Ménaka",
            Region::Bamako => "Bamako",
        }
    }

    /// Exact-match lookup against the region labels. No normalization:
    /// "ségou" or "Segou" are not valid choices, only "Ségou" is.
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.iter().copied().find(|r| r.as_str() == name)
    }
}

// A production site (farm plot) owned by one account.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Uuid,
    pub farmer_id: Uuid,
    #[schema(example = "Kayes Sun Farm")]
    pub name: String,
    pub location: Region,
    pub created_at: DateTime<Utc>,
}

impl Owned for Site {
    fn owner_account_id(&self) -> Uuid {
        self.farmer_id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSitePayload {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    // Absent location falls back to Bamako; present values are checked
    // against the region set in the service.
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSitePayload {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: Option<String>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eleven_regions_resolve_by_exact_label() {
        assert_eq!(Region::ALL.len(), 11);
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.as_str()), Some(region));
        }
    }

    #[test]
    fn accented_labels_are_matched_exactly() {
        assert_eq!(Region::from_name("Ségou"), Some(Region::Segou));
        assert_eq!(Region::from_name("Taoudénit"), Some(Region::Taoudenit));
        assert_eq!(Region::from_name("Ménaka"), Some(Region::Menaka));
        assert_eq!(Region::from_name("Segou"), None);
        assert_eq!(Region::from_name("ségou"), None);
        assert_eq!(Region::from_name("Timbuktu"), None);
    }

    #[test]
    fn site_serializes_camel_case_with_region_label() {
        let site = Site {
            id: Uuid::new_v4(),
            farmer_id: Uuid::new_v4(),
            name: "Kayes Sun Farm".to_string(),
            location: Region::Kayes,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&site).unwrap();

        assert_eq!(json["location"], "Kayes");
        assert!(json.get("farmerId").is_some());
        assert!(json.get("farmer_id").is_none());
    }

    #[test]
    fn site_owner_is_the_farmer() {
        let farmer_id = Uuid::new_v4();
        let site = Site {
            id: Uuid::new_v4(),
            farmer_id,
            name: "Niger Bend Plot".to_string(),
            location: Region::Segou,
            created_at: Utc::now(),
        };
        assert_eq!(site.owner_account_id(), farmer_id);
    }
}
