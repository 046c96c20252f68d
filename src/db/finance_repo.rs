// src/db/finance_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::{field_error, AppError},
    models::finance::{ExpenseCategory, Investment, Transaction, TransactionType},
};

// The names Postgres gave the ledger's reference constraints. A broken
// reference is the caller's mistake, so it surfaces as a field-level
// validation error instead of a 500.
fn reference_field(constraint: &str) -> Option<&'static str> {
    match constraint {
        "transactions_site_id_fkey" => Some("siteId"),
        "transactions_project_id_fkey" => Some("projectId"),
        "investments_related_project_id_fkey" => Some("relatedProjectId"),
        _ => None,
    }
}

fn map_reference_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            if let Some(field) = db_err.constraint().and_then(reference_field) {
                return field_error(field, "does_not_exist", "Object does not exist.");
            }
        }
    }
    e.into()
}

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  TRANSACTIONS (income / expense)
    // =========================================================================

    pub async fn find_transactions_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE user_id = $1 ORDER BY date DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(transactions)
    }

    pub async fn find_transaction_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Transaction>, AppError> {
        let maybe_transaction =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_transaction)
    }

    pub async fn find_transaction_scoped(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Transaction>, AppError> {
        let maybe_transaction = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_transaction)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionType,
        amount: Decimal,
        date: NaiveDate,
        description: &str,
        site_id: Option<Uuid>,
        project_id: Option<Uuid>,
        category: Option<ExpenseCategory>,
    ) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions
                (user_id, kind, amount, date, description, site_id, project_id, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .bind(amount)
        .bind(date)
        .bind(description)
        .bind(site_id)
        .bind(project_id)
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_violation)
    }

    // Partial update: absent fields keep their current values.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_transaction(
        &self,
        id: Uuid,
        kind: Option<TransactionType>,
        amount: Option<Decimal>,
        date: Option<NaiveDate>,
        description: Option<&str>,
        site_id: Option<Uuid>,
        project_id: Option<Uuid>,
        category: Option<ExpenseCategory>,
    ) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET kind        = COALESCE($2, kind),
                amount      = COALESCE($3, amount),
                date        = COALESCE($4, date),
                description = COALESCE($5, description),
                site_id     = COALESCE($6, site_id),
                project_id  = COALESCE($7, project_id),
                category    = COALESCE($8, category)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(kind)
        .bind(amount)
        .bind(date)
        .bind(description)
        .bind(site_id)
        .bind(project_id)
        .bind(category)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_reference_violation)?
        .ok_or(AppError::NotFound("Transaction not found."))
    }

    pub async fn delete_transaction(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction not found."));
        }
        Ok(())
    }

    // =========================================================================
    //  INVESTMENTS
    // =========================================================================

    pub async fn find_investments_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Investment>, AppError> {
        let investments = sqlx::query_as::<_, Investment>(
            "SELECT * FROM investments WHERE user_id = $1 ORDER BY date DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(investments)
    }

    pub async fn find_investment_by_id(&self, id: Uuid) -> Result<Option<Investment>, AppError> {
        let maybe_investment =
            sqlx::query_as::<_, Investment>("SELECT * FROM investments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_investment)
    }

    pub async fn find_investment_scoped(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Investment>, AppError> {
        let maybe_investment = sqlx::query_as::<_, Investment>(
            "SELECT * FROM investments WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_investment)
    }

    pub async fn create_investment(
        &self,
        user_id: Uuid,
        name: &str,
        amount: Decimal,
        date: NaiveDate,
        description: &str,
        related_project_id: Option<Uuid>,
    ) -> Result<Investment, AppError> {
        sqlx::query_as::<_, Investment>(
            r#"
            INSERT INTO investments (user_id, name, amount, date, description, related_project_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(amount)
        .bind(date)
        .bind(description)
        .bind(related_project_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_violation)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_investment(
        &self,
        id: Uuid,
        name: Option<&str>,
        amount: Option<Decimal>,
        date: Option<NaiveDate>,
        description: Option<&str>,
        related_project_id: Option<Uuid>,
    ) -> Result<Investment, AppError> {
        sqlx::query_as::<_, Investment>(
            r#"
            UPDATE investments
            SET name               = COALESCE($2, name),
                amount             = COALESCE($3, amount),
                date               = COALESCE($4, date),
                description        = COALESCE($5, description),
                related_project_id = COALESCE($6, related_project_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(amount)
        .bind(date)
        .bind(description)
        .bind(related_project_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_reference_violation)?
        .ok_or(AppError::NotFound("Investment not found."))
    }

    pub async fn delete_investment(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM investments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Investment not found."));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_reference_constraints_map_to_their_payload_fields() {
        assert_eq!(reference_field("transactions_site_id_fkey"), Some("siteId"));
        assert_eq!(
            reference_field("transactions_project_id_fkey"),
            Some("projectId")
        );
        assert_eq!(
            reference_field("investments_related_project_id_fkey"),
            Some("relatedProjectId")
        );
        assert_eq!(reference_field("transactions_user_id_fkey"), None);
    }

    #[test]
    fn non_database_errors_pass_through_unchanged() {
        let mapped = map_reference_violation(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, AppError::DatabaseError(_)));
    }
}
