// src/services/finance_service.rs

use uuid::Uuid;

use crate::{
    common::error::{field_error, AppError},
    common::ownership::ensure_owner,
    db::FinanceRepository,
    models::finance::{
        CreateInvestmentPayload, CreateTransactionPayload, ExpenseCategory, Investment,
        Transaction, TransactionType, UpdateInvestmentPayload, UpdateTransactionPayload,
    },
};

// The category field describes an expense. Whether carrying one on an income
// row is an error is configurable (STRICT_EXPENSE_CATEGORY); historically it
// was accepted and stored.
fn ensure_category_applies(
    kind: TransactionType,
    category: Option<ExpenseCategory>,
) -> Result<(), AppError> {
    if kind == TransactionType::Income && category.is_some() {
        return Err(field_error(
            "category",
            "invalid",
            "Category does not apply to income transactions.",
        ));
    }
    Ok(())
}

// Ledger rows belong to exactly one account, always the actor's: create
// forces it, list/retrieve filter on it, update/delete gate on it. The
// optional site/project references are tags whose existence the database
// enforces; their ownership is deliberately not checked.
#[derive(Clone)]
pub struct FinanceService {
    finance_repo: FinanceRepository,
    strict_expense_category: bool,
}

impl FinanceService {
    pub fn new(finance_repo: FinanceRepository, strict_expense_category: bool) -> Self {
        Self {
            finance_repo,
            strict_expense_category,
        }
    }

    // =========================================================================
    //  TRANSACTIONS
    // =========================================================================

    pub async fn list_transactions(&self, actor_id: Uuid) -> Result<Vec<Transaction>, AppError> {
        self.finance_repo.find_transactions_by_user(actor_id).await
    }

    pub async fn create_transaction(
        &self,
        actor_id: Uuid,
        payload: CreateTransactionPayload,
    ) -> Result<Transaction, AppError> {
        if self.strict_expense_category {
            ensure_category_applies(payload.kind, payload.category)?;
        }

        self.finance_repo
            .create_transaction(
                actor_id,
                payload.kind,
                payload.amount,
                payload.date,
                &payload.description,
                payload.site_id,
                payload.project_id,
                payload.category,
            )
            .await
    }

    pub async fn retrieve_transaction(
        &self,
        actor_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<Transaction, AppError> {
        self.finance_repo
            .find_transaction_scoped(transaction_id, actor_id)
            .await?
            .ok_or(AppError::NotFound("Transaction not found."))
    }

    pub async fn update_transaction(
        &self,
        actor_id: Uuid,
        transaction_id: Uuid,
        payload: UpdateTransactionPayload,
    ) -> Result<Transaction, AppError> {
        let existing = self
            .finance_repo
            .find_transaction_by_id(transaction_id)
            .await?
            .ok_or(AppError::NotFound("Transaction not found."))?;
        ensure_owner(
            actor_id,
            &existing,
            "You do not have permission to perform this action.",
        )?;

        if self.strict_expense_category {
            // Validate the row as it will stand after the partial update.
            let kind = payload.kind.unwrap_or(existing.kind);
            let category = payload.category.or(existing.category);
            ensure_category_applies(kind, category)?;
        }

        self.finance_repo
            .update_transaction(
                transaction_id,
                payload.kind,
                payload.amount,
                payload.date,
                payload.description.as_deref(),
                payload.site_id,
                payload.project_id,
                payload.category,
            )
            .await
    }

    pub async fn delete_transaction(
        &self,
        actor_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<(), AppError> {
        let existing = self
            .finance_repo
            .find_transaction_by_id(transaction_id)
            .await?
            .ok_or(AppError::NotFound("Transaction not found."))?;
        ensure_owner(
            actor_id,
            &existing,
            "You do not have permission to perform this action.",
        )?;

        self.finance_repo.delete_transaction(transaction_id).await
    }

    // =========================================================================
    //  INVESTMENTS
    // =========================================================================

    pub async fn list_investments(&self, actor_id: Uuid) -> Result<Vec<Investment>, AppError> {
        self.finance_repo.find_investments_by_user(actor_id).await
    }

    pub async fn create_investment(
        &self,
        actor_id: Uuid,
        payload: CreateInvestmentPayload,
    ) -> Result<Investment, AppError> {
        self.finance_repo
            .create_investment(
                actor_id,
                &payload.name,
                payload.amount,
                payload.date,
                &payload.description,
                payload.related_project_id,
            )
            .await
    }

    pub async fn retrieve_investment(
        &self,
        actor_id: Uuid,
        investment_id: Uuid,
    ) -> Result<Investment, AppError> {
        self.finance_repo
            .find_investment_scoped(investment_id, actor_id)
            .await?
            .ok_or(AppError::NotFound("Investment not found."))
    }

    pub async fn update_investment(
        &self,
        actor_id: Uuid,
        investment_id: Uuid,
        payload: UpdateInvestmentPayload,
    ) -> Result<Investment, AppError> {
        let existing = self
            .finance_repo
            .find_investment_by_id(investment_id)
            .await?
            .ok_or(AppError::NotFound("Investment not found."))?;
        ensure_owner(
            actor_id,
            &existing,
            "You do not have permission to perform this action.",
        )?;

        self.finance_repo
            .update_investment(
                investment_id,
                payload.name.as_deref(),
                payload.amount,
                payload.date,
                payload.description.as_deref(),
                payload.related_project_id,
            )
            .await
    }

    pub async fn delete_investment(
        &self,
        actor_id: Uuid,
        investment_id: Uuid,
    ) -> Result<(), AppError> {
        let existing = self
            .finance_repo
            .find_investment_by_id(investment_id)
            .await?
            .ok_or(AppError::NotFound("Investment not found."))?;
        ensure_owner(
            actor_id,
            &existing,
            "You do not have permission to perform this action.",
        )?;

        self.finance_repo.delete_investment(investment_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_expense_may_carry_a_category() {
        assert!(ensure_category_applies(
            TransactionType::Expense,
            Some(ExpenseCategory::Supplies)
        )
        .is_ok());
        assert!(ensure_category_applies(TransactionType::Expense, None).is_ok());
    }

    #[test]
    fn an_income_row_without_a_category_is_fine() {
        assert!(ensure_category_applies(TransactionType::Income, None).is_ok());
    }

    #[test]
    fn an_income_row_with_a_category_is_rejected_on_the_category_field() {
        let err = ensure_category_applies(
            TransactionType::Income,
            Some(ExpenseCategory::Equipment),
        )
        .unwrap_err();

        match err {
            AppError::ValidationError(errors) => {
                assert!(errors.field_errors().contains_key("category"));
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }
}
