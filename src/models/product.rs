// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "availability_status")]
pub enum AvailabilityStatus {
    Available,
    #[sqlx(rename = "Out of Stock")]
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[sqlx(rename = "Pre-order")]
    #[serde(rename = "Pre-order")]
    PreOrder,
}

// A sellable output of a project. `image` is a reference (URL or path);
// the blob itself lives outside this system.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub project_id: Uuid,
    #[schema(example = "Kent Mangoes")]
    pub name: String,
    pub quantity: f64,
    #[schema(example = "1.50")]
    pub price: Decimal,
    #[schema(example = "kg")]
    pub unit: String,
    pub availability: AvailabilityStatus,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    // Checked for presence in the service so the error cites "projectId".
    pub project_id: Option<Uuid>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    pub quantity: f64,
    pub price: Decimal,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub unit: String,
    pub availability: Option<AvailabilityStatus>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    pub project_id: Option<Uuid>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<Decimal>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub unit: Option<String>,
    pub availability: Option<AvailabilityStatus>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_labels_round_trip() {
        assert_eq!(
            serde_json::to_value(AvailabilityStatus::OutOfStock).unwrap(),
            "Out of Stock"
        );
        assert_eq!(
            serde_json::from_value::<AvailabilityStatus>(serde_json::json!("Pre-order")).unwrap(),
            AvailabilityStatus::PreOrder
        );
    }

    #[test]
    fn product_serializes_price_as_a_number() {
        let product = Product {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            name: "Kent Mangoes".to_string(),
            quantity: 2000.0,
            price: "1.50".parse().unwrap(),
            unit: "kg".to_string(),
            availability: AvailabilityStatus::Available,
            image: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["price"], 1.5);
        assert_eq!(json["availability"], "Available");
        assert!(json.get("projectId").is_some());
    }

    #[test]
    fn create_payload_defaults_apply() {
        let payload: CreateProductPayload = serde_json::from_value(serde_json::json!({
            "name": "Kent Mangoes",
            "quantity": 2000.0,
            "price": 1.50,
            "unit": "kg"
        }))
        .unwrap();

        assert_eq!(payload.project_id, None);
        assert!(payload.availability.is_none());
        assert!(payload.image.is_none());
    }
}
