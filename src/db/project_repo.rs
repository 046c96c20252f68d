// src/db/project_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::project::{Project, ProjectStatus},
};

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Scoped listing: ownership of a project lives one hop away, on the site,
    // so the scope filter joins through it.
    pub async fn find_by_owner(&self, farmer_id: Uuid) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT p.*
            FROM projects p
            JOIN sites s ON s.id = p.site_id
            WHERE s.farmer_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(farmer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(projects)
    }

    // Unscoped lookup, for the ownership walk before a mutation.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        let maybe_project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_project)
    }

    pub async fn find_scoped(&self, id: Uuid, farmer_id: Uuid) -> Result<Option<Project>, AppError> {
        let maybe_project = sqlx::query_as::<_, Project>(
            r#"
            SELECT p.*
            FROM projects p
            JOIN sites s ON s.id = p.site_id
            WHERE p.id = $1 AND s.farmer_id = $2
            "#,
        )
        .bind(id)
        .bind(farmer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_project)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        site_id: Uuid,
        name: &str,
        description: &str,
        crop_type: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        expected_yield: f64,
        status: ProjectStatus,
    ) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (site_id, name, description, crop_type, start_date, end_date, expected_yield, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(site_id)
        .bind(name)
        .bind(description)
        .bind(crop_type)
        .bind(start_date)
        .bind(end_date)
        .bind(expected_yield)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(project)
    }

    // Partial update: absent fields keep their current values.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        site_id: Option<Uuid>,
        name: Option<&str>,
        description: Option<&str>,
        crop_type: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        expected_yield: Option<f64>,
        status: Option<ProjectStatus>,
    ) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET site_id        = COALESCE($2, site_id),
                name           = COALESCE($3, name),
                description    = COALESCE($4, description),
                crop_type      = COALESCE($5, crop_type),
                start_date     = COALESCE($6, start_date),
                end_date       = COALESCE($7, end_date),
                expected_yield = COALESCE($8, expected_yield),
                status         = COALESCE($9, status)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(site_id)
        .bind(name)
        .bind(description)
        .bind(crop_type)
        .bind(start_date)
        .bind(end_date)
        .bind(expected_yield)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound("Project not found."))
    }

    // Products go with the project (ON DELETE CASCADE); ledger references
    // are nulled, not deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found."));
        }
        Ok(())
    }
}
