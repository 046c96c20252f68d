// src/models/analytics.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// --- Slim rows the repository feeds the folds with ---

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRevenueRow {
    pub crop_type: String,
    pub price: Decimal,
    pub quantity: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectYieldRow {
    pub crop_type: String,
    pub expected_yield: f64,
}

// --- Dashboard DTOs ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusCount {
    #[schema(example = "Harvesting")]
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CropRevenue {
    #[schema(example = "Mango")]
    pub name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CropYield {
    #[schema(example = "Mango")]
    pub name: String,
    #[serde(rename = "yield")]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub project_status_data: Vec<StatusCount>,
    pub revenue_by_crop_data: Vec<CropRevenue>,
    pub yield_by_crop_data: Vec<CropYield>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_the_dashboard_shape() {
        let summary = AnalyticsSummary {
            project_status_data: vec![StatusCount {
                name: "Harvesting".to_string(),
                value: 2,
            }],
            revenue_by_crop_data: vec![CropRevenue {
                name: "Mango".to_string(),
                revenue: 3000.0,
            }],
            yield_by_crop_data: vec![CropYield {
                name: "Mango".to_string(),
                amount: 2500.0,
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["projectStatusData"][0]["value"], 2);
        assert_eq!(json["revenueByCropData"][0]["revenue"], 3000.0);
        assert_eq!(json["yieldByCropData"][0]["yield"], 2500.0);
    }
}
