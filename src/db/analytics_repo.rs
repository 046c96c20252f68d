// src/db/analytics_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::analytics::{ProductRevenueRow, ProjectYieldRow},
    models::project::ProjectStatus,
};

// Feeds the dashboard folds with slim rows over the whole corpus. The
// summary is deliberately cross-tenant, so nothing here takes an actor.
#[derive(Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn project_statuses(&self) -> Result<Vec<ProjectStatus>, AppError> {
        let statuses = sqlx::query_scalar::<_, ProjectStatus>("SELECT status FROM projects")
            .fetch_all(&self.pool)
            .await?;
        Ok(statuses)
    }

    // Each product paired with the crop of its parent project.
    pub async fn product_revenue_rows(&self) -> Result<Vec<ProductRevenueRow>, AppError> {
        let rows = sqlx::query_as::<_, ProductRevenueRow>(
            r#"
            SELECT pj.crop_type, pr.price, pr.quantity
            FROM products pr
            JOIN projects pj ON pj.id = pr.project_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn project_yield_rows(&self) -> Result<Vec<ProjectYieldRow>, AppError> {
        let rows = sqlx::query_as::<_, ProjectYieldRow>(
            "SELECT crop_type, expected_yield FROM projects",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
