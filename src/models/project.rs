// src/models/project.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "project_status")]
pub enum ProjectStatus {
    Planning,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Harvesting,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Harvesting => "Harvesting",
            ProjectStatus::Completed => "Completed",
        }
    }
}

// A cultivation project running on a site.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub site_id: Uuid,
    #[schema(example = "Mango Season 2024")]
    pub name: String,
    pub description: String,
    #[schema(example = "Mango")]
    pub crop_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub expected_yield: f64,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    // Checked for presence in the service so the error cites "siteId".
    pub site_id: Option<Uuid>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub crop_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 0.0, message = "Ensure this value is greater than or equal to 0."))]
    pub expected_yield: f64,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectPayload {
    // Re-targeting a project to another site goes through the same
    // existence and ownership checks as create.
    pub site_id: Option<Uuid>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub crop_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "Ensure this value is greater than or equal to 0."))]
    pub expected_yield: Option<f64>,
    pub status: Option<ProjectStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_the_stored_values() {
        assert_eq!(ProjectStatus::InProgress.as_str(), "In Progress");
        assert_eq!(
            serde_json::to_value(ProjectStatus::InProgress).unwrap(),
            "In Progress"
        );
        assert_eq!(
            serde_json::from_value::<ProjectStatus>(serde_json::json!("Harvesting")).unwrap(),
            ProjectStatus::Harvesting
        );
    }

    #[test]
    fn create_payload_accepts_camel_case_and_absent_site_id() {
        let payload: CreateProjectPayload = serde_json::from_value(serde_json::json!({
            "name": "Mango Season 2024",
            "cropType": "Mango",
            "startDate": "2024-03-01",
            "endDate": "2024-07-15",
            "expectedYield": 2500.0
        }))
        .unwrap();

        assert_eq!(payload.site_id, None);
        assert_eq!(payload.crop_type, "Mango");
        assert_eq!(payload.description, "");
        assert!(payload.status.is_none());
    }

    #[test]
    fn negative_expected_yield_fails_validation() {
        let payload: CreateProjectPayload = serde_json::from_value(serde_json::json!({
            "siteId": Uuid::new_v4(),
            "name": "Rice Trial",
            "cropType": "Rice",
            "startDate": "2024-06-01",
            "endDate": "2024-11-30",
            "expectedYield": -10.0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("expected_yield"));
    }
}
