// src/services/analytics_service.rs

use std::collections::BTreeMap;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::AnalyticsRepository,
    models::analytics::{
        AnalyticsSummary, CropRevenue, CropYield, ProductRevenueRow, ProjectYieldRow, StatusCount,
    },
    models::project::ProjectStatus,
};

// The folds run over plain vectors so they stay testable without a
// database. BTreeMap keeps the output order deterministic: statuses in
// pipeline order, crops alphabetically.

fn fold_status_counts(statuses: Vec<ProjectStatus>) -> Vec<StatusCount> {
    let mut counts: BTreeMap<ProjectStatus, i64> = BTreeMap::new();
    for status in statuses {
        *counts.entry(status).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(status, value)| StatusCount {
            name: status.as_str().to_string(),
            value,
        })
        .collect()
}

// Revenue is price x quantity per product, summed over the crop of the
// product's parent project. Prices accumulate as decimals; the dashboard
// gets a float at the very end.
fn fold_revenue_by_crop(rows: Vec<ProductRevenueRow>) -> Vec<CropRevenue> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for row in rows {
        let quantity = Decimal::from_f64(row.quantity).unwrap_or_default();
        *totals.entry(row.crop_type).or_insert(Decimal::ZERO) += row.price * quantity;
    }

    totals
        .into_iter()
        .map(|(name, revenue)| CropRevenue {
            name,
            revenue: revenue.to_f64().unwrap_or(0.0),
        })
        .collect()
}

fn fold_yield_by_crop(rows: Vec<ProjectYieldRow>) -> Vec<CropYield> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.crop_type).or_insert(0.0) += row.expected_yield;
    }

    totals
        .into_iter()
        .map(|(name, amount)| CropYield { name, amount })
        .collect()
}

#[derive(Clone)]
pub struct AnalyticsService {
    analytics_repo: AnalyticsRepository,
}

impl AnalyticsService {
    pub fn new(analytics_repo: AnalyticsRepository) -> Self {
        Self { analytics_repo }
    }

    pub async fn summary(&self) -> Result<AnalyticsSummary, AppError> {
        let statuses = self.analytics_repo.project_statuses().await?;
        let revenue_rows = self.analytics_repo.product_revenue_rows().await?;
        let yield_rows = self.analytics_repo.project_yield_rows().await?;

        Ok(AnalyticsSummary {
            project_status_data: fold_status_counts(statuses),
            revenue_by_crop_data: fold_revenue_by_crop(revenue_rows),
            yield_by_crop_data: fold_yield_by_crop(yield_rows),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_counted_per_label() {
        let counts = fold_status_counts(vec![
            ProjectStatus::Harvesting,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
            ProjectStatus::Harvesting,
            ProjectStatus::InProgress,
        ]);

        assert_eq!(
            counts,
            vec![
                StatusCount {
                    name: "In Progress".to_string(),
                    value: 2
                },
                StatusCount {
                    name: "Harvesting".to_string(),
                    value: 2
                },
                StatusCount {
                    name: "Completed".to_string(),
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn no_projects_means_an_empty_breakdown() {
        assert!(fold_status_counts(vec![]).is_empty());
        assert!(fold_revenue_by_crop(vec![]).is_empty());
        assert!(fold_yield_by_crop(vec![]).is_empty());
    }

    #[test]
    fn revenue_multiplies_price_by_quantity_and_groups_by_crop() {
        let rows = vec![
            ProductRevenueRow {
                crop_type: "Mango".to_string(),
                price: Decimal::new(150, 2), // 1.50
                quantity: 2000.0,
            },
            ProductRevenueRow {
                crop_type: "Rice".to_string(),
                price: Decimal::new(80, 2), // 0.80
                quantity: 500.0,
            },
            ProductRevenueRow {
                crop_type: "Mango".to_string(),
                price: Decimal::new(200, 2), // 2.00
                quantity: 100.0,
            },
        ];

        let revenue = fold_revenue_by_crop(rows);

        assert_eq!(
            revenue,
            vec![
                CropRevenue {
                    name: "Mango".to_string(),
                    revenue: 3200.0
                },
                CropRevenue {
                    name: "Rice".to_string(),
                    revenue: 400.0
                },
            ]
        );
    }

    #[test]
    fn single_product_revenue_is_exact() {
        let rows = vec![
            ProductRevenueRow {
                crop_type: "Mango".to_string(),
                price: Decimal::new(150, 2), // 1.50
                quantity: 2000.0,
            },
            ProductRevenueRow {
                crop_type: "Millet".to_string(),
                price: Decimal::new(45, 2), // 0.45
                quantity: 800.0,
            },
        ];

        let revenue = fold_revenue_by_crop(rows);
        let mango = revenue
            .iter()
            .find(|entry| entry.name == "Mango")
            .expect("Mango should appear in the breakdown");

        assert_eq!(mango.revenue, 3000.0);
    }

    #[test]
    fn expected_yields_sum_per_crop() {
        let rows = vec![
            ProjectYieldRow {
                crop_type: "Mango".to_string(),
                expected_yield: 2500.0,
            },
            ProjectYieldRow {
                crop_type: "Mango".to_string(),
                expected_yield: 500.0,
            },
            ProjectYieldRow {
                crop_type: "Millet".to_string(),
                expected_yield: 1200.0,
            },
        ];

        let yields = fold_yield_by_crop(rows);

        assert_eq!(
            yields,
            vec![
                CropYield {
                    name: "Mango".to_string(),
                    amount: 3000.0
                },
                CropYield {
                    name: "Millet".to_string(),
                    amount: 1200.0
                },
            ]
        );
    }
}
