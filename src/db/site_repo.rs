// src/db/site_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::site::{Region, Site},
};

#[derive(Clone)]
pub struct SiteRepository {
    pool: PgPool,
}

impl SiteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Scoped listing: a farmer only ever sees their own sites.
    pub async fn find_by_farmer(&self, farmer_id: Uuid) -> Result<Vec<Site>, AppError> {
        let sites = sqlx::query_as::<_, Site>(
            "SELECT * FROM sites WHERE farmer_id = $1 ORDER BY created_at DESC",
        )
        .bind(farmer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sites)
    }

    // Unscoped lookup, for the ownership walk before a mutation.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Site>, AppError> {
        let maybe_site = sqlx::query_as::<_, Site>("SELECT * FROM sites WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_site)
    }

    // Scoped lookup: a foreign site is indistinguishable from a missing one.
    pub async fn find_scoped(&self, id: Uuid, farmer_id: Uuid) -> Result<Option<Site>, AppError> {
        let maybe_site =
            sqlx::query_as::<_, Site>("SELECT * FROM sites WHERE id = $1 AND farmer_id = $2")
                .bind(id)
                .bind(farmer_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_site)
    }

    pub async fn create(
        &self,
        farmer_id: Uuid,
        name: &str,
        location: Region,
    ) -> Result<Site, AppError> {
        let site = sqlx::query_as::<_, Site>(
            r#"
            INSERT INTO sites (farmer_id, name, location)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(farmer_id)
        .bind(name)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;
        Ok(site)
    }

    // Partial update: absent fields keep their current values.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        location: Option<Region>,
    ) -> Result<Site, AppError> {
        sqlx::query_as::<_, Site>(
            r#"
            UPDATE sites
            SET name     = COALESCE($2, name),
                location = COALESCE($3, location)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(location)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound("Site not found."))
    }

    // Projects and their products go with the site (ON DELETE CASCADE);
    // ledger rows referencing it only lose the reference (ON DELETE SET NULL).
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Site not found."));
        }
        Ok(())
    }
}
