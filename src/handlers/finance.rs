// src/handlers/finance.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::finance::{
        CreateInvestmentPayload, CreateTransactionPayload, Investment, Transaction,
        UpdateInvestmentPayload, UpdateTransactionPayload,
    },
};

// =========================================================================
//  TRANSACTIONS
// =========================================================================

// GET /api/finance/transactions
#[utoipa::path(
    get,
    path = "/api/finance/transactions",
    tag = "Finance",
    responses(
        (status = 200, description = "The account's ledger, most recent date first", body = Vec<Transaction>),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let transactions = app_state
        .finance_service
        .list_transactions(user.0.id)
        .await?;

    Ok((StatusCode::OK, Json(transactions)))
}

// POST /api/finance/transactions
#[utoipa::path(
    post,
    path = "/api/finance/transactions",
    tag = "Finance",
    request_body = CreateTransactionPayload,
    responses(
        (status = 201, description = "Transaction recorded for the authenticated account", body = Transaction),
        (status = 400, description = "One or more fields are invalid, or a referenced site/project does not exist"),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let transaction = app_state
        .finance_service
        .create_transaction(user.0.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// GET /api/finance/transactions/{id}
#[utoipa::path(
    get,
    path = "/api/finance/transactions/{id}",
    tag = "Finance",
    responses(
        (status = 200, description = "One of the account's transactions", body = Transaction),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such transaction on this account")
    ),
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("api_jwt" = []))
)]
pub async fn get_transaction(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = app_state
        .finance_service
        .retrieve_transaction(user.0.id, id)
        .await?;

    Ok((StatusCode::OK, Json(transaction)))
}

// PUT /api/finance/transactions/{id}
#[utoipa::path(
    put,
    path = "/api/finance/transactions/{id}",
    tag = "Finance",
    request_body = UpdateTransactionPayload,
    responses(
        (status = 200, description = "Updated transaction", body = Transaction),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Transaction belongs to another account"),
        (status = 404, description = "Transaction not found")
    ),
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("api_jwt" = []))
)]
pub async fn update_transaction(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let transaction = app_state
        .finance_service
        .update_transaction(user.0.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(transaction)))
}

// DELETE /api/finance/transactions/{id}
#[utoipa::path(
    delete,
    path = "/api/finance/transactions/{id}",
    tag = "Finance",
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Transaction belongs to another account"),
        (status = 404, description = "Transaction not found")
    ),
    params(("id" = Uuid, Path, description = "Transaction id")),
    security(("api_jwt" = []))
)]
pub async fn delete_transaction(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .finance_service
        .delete_transaction(user.0.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
//  INVESTMENTS
// =========================================================================

// GET /api/finance/investments
#[utoipa::path(
    get,
    path = "/api/finance/investments",
    tag = "Finance",
    responses(
        (status = 200, description = "The account's investments, most recent date first", body = Vec<Investment>),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_investments(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let investments = app_state
        .finance_service
        .list_investments(user.0.id)
        .await?;

    Ok((StatusCode::OK, Json(investments)))
}

// POST /api/finance/investments
#[utoipa::path(
    post,
    path = "/api/finance/investments",
    tag = "Finance",
    request_body = CreateInvestmentPayload,
    responses(
        (status = 201, description = "Investment recorded for the authenticated account", body = Investment),
        (status = 400, description = "One or more fields are invalid, or the referenced project does not exist"),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_investment(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateInvestmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let investment = app_state
        .finance_service
        .create_investment(user.0.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(investment)))
}

// GET /api/finance/investments/{id}
#[utoipa::path(
    get,
    path = "/api/finance/investments/{id}",
    tag = "Finance",
    responses(
        (status = 200, description = "One of the account's investments", body = Investment),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such investment on this account")
    ),
    params(("id" = Uuid, Path, description = "Investment id")),
    security(("api_jwt" = []))
)]
pub async fn get_investment(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let investment = app_state
        .finance_service
        .retrieve_investment(user.0.id, id)
        .await?;

    Ok((StatusCode::OK, Json(investment)))
}

// PUT /api/finance/investments/{id}
#[utoipa::path(
    put,
    path = "/api/finance/investments/{id}",
    tag = "Finance",
    request_body = UpdateInvestmentPayload,
    responses(
        (status = 200, description = "Updated investment", body = Investment),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Investment belongs to another account"),
        (status = 404, description = "Investment not found")
    ),
    params(("id" = Uuid, Path, description = "Investment id")),
    security(("api_jwt" = []))
)]
pub async fn update_investment(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInvestmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let investment = app_state
        .finance_service
        .update_investment(user.0.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(investment)))
}

// DELETE /api/finance/investments/{id}
#[utoipa::path(
    delete,
    path = "/api/finance/investments/{id}",
    tag = "Finance",
    responses(
        (status = 204, description = "Investment deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Investment belongs to another account"),
        (status = 404, description = "Investment not found")
    ),
    params(("id" = Uuid, Path, description = "Investment id")),
    security(("api_jwt" = []))
)]
pub async fn delete_investment(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .finance_service
        .delete_investment(user.0.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
