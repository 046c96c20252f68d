// src/db/product_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::product::{AvailabilityStatus, Product},
};

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // The catalog is public: no scope filter on reads.
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let maybe_product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_product)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        project_id: Uuid,
        name: &str,
        quantity: f64,
        price: Decimal,
        unit: &str,
        availability: AvailabilityStatus,
        image: Option<&str>,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (project_id, name, quantity, price, unit, availability, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(project_id)
        .bind(name)
        .bind(quantity)
        .bind(price)
        .bind(unit)
        .bind(availability)
        .bind(image)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    // Partial update: absent fields keep their current values.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        project_id: Option<Uuid>,
        name: Option<&str>,
        quantity: Option<f64>,
        price: Option<Decimal>,
        unit: Option<&str>,
        availability: Option<AvailabilityStatus>,
        image: Option<&str>,
    ) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET project_id   = COALESCE($2, project_id),
                name         = COALESCE($3, name),
                quantity     = COALESCE($4, quantity),
                price        = COALESCE($5, price),
                unit         = COALESCE($6, unit),
                availability = COALESCE($7, availability),
                image        = COALESCE($8, image)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(project_id)
        .bind(name)
        .bind(quantity)
        .bind(price)
        .bind(unit)
        .bind(availability)
        .bind(image)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound("Product not found."))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product not found."));
        }
        Ok(())
    }
}
