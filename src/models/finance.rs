// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::ownership::Owned;

// --- Enums (mapping the Postgres types) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "expense_category")]
pub enum ExpenseCategory {
    Equipment,
    Supplies,
    Infrastructure,
    Labor,
    Utilities,
    Other,
}

// --- Structs ---

// A ledger entry. Site/project references are optional tags; the rows they
// point at may disappear, nulling the reference but keeping the entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[schema(example = "125.00")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub site_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub category: Option<ExpenseCategory>,
    pub created_at: DateTime<Utc>,
}

impl Owned for Transaction {
    fn owner_account_id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Irrigation pump")]
    pub name: String,
    #[schema(example = "800.00")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub related_project_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Owned for Investment {
    fn owner_account_id(&self) -> Uuid {
        self.user_id
    }
}

// --- Payloads ---
// Neither payload carries a user field: ledger rows always belong to the
// authenticated actor.

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub site_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub category: Option<ExpenseCategory>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionPayload {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub site_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub category: Option<ExpenseCategory>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestmentPayload {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub related_project_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvestmentPayload {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub related_project_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_kind_serializes_as_type() {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: TransactionType::Expense,
            amount: "125.00".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            description: "Drip lines".to_string(),
            site_id: None,
            project_id: None,
            category: Some(ExpenseCategory::Supplies),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["type"], "expense");
        assert!(json.get("kind").is_none());
        assert_eq!(json["category"], "Supplies");
        assert_eq!(json["amount"], 125.0);
    }

    #[test]
    fn create_payload_reads_type_and_camel_case_references() {
        let site_id = Uuid::new_v4();
        let payload: CreateTransactionPayload = serde_json::from_value(serde_json::json!({
            "type": "income",
            "amount": 540.0,
            "date": "2024-07-20",
            "siteId": site_id
        }))
        .unwrap();

        assert_eq!(payload.kind, TransactionType::Income);
        assert_eq!(payload.site_id, Some(site_id));
        assert_eq!(payload.description, "");
        assert!(payload.category.is_none());
    }

    #[test]
    fn investment_serializes_related_project_id() {
        let project_id = Uuid::new_v4();
        let investment = Investment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Irrigation pump".to_string(),
            amount: "800.00".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: String::new(),
            related_project_id: Some(project_id),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&investment).unwrap();

        assert_eq!(json["relatedProjectId"], project_id.to_string());
    }

    #[test]
    fn ledger_rows_are_owned_by_their_account() {
        let user_id = Uuid::new_v4();
        let investment = Investment {
            id: Uuid::new_v4(),
            user_id,
            name: "Seed stock".to_string(),
            amount: "60.00".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: String::new(),
            related_project_id: None,
            created_at: Utc::now(),
        };
        assert_eq!(investment.owner_account_id(), user_id);
    }
}
