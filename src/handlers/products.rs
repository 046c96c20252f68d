// src/handlers/products.rs

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
    models::product::{CreateProductPayload, Product, UpdateProductPayload},
};

// GET /api/products — the marketplace catalog, open to buyers.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Every listed product, newest first", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.list().await?;

    Ok((StatusCode::OK, Json(products)))
}

// GET /api/products/{id} — also public.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    responses(
        (status = 200, description = "A single product listing", body = Product),
        (status = 404, description = "Product not found")
    ),
    params(("id" = Uuid, Path, description = "Product id"))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_service.retrieve(id).await?;

    Ok((StatusCode::OK, Json(product)))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Product listed under one of the farmer's projects", body = Product),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Target project belongs to another farmer")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state.product_service.create(user.0.id, payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Product or target project belongs to another farmer"),
        (status = 404, description = "Product not found")
    ),
    params(("id" = Uuid, Path, description = "Product id")),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state
        .product_service
        .update(user.0.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    responses(
        (status = 204, description = "Product removed from the catalog"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Product belongs to another farmer"),
        (status = 404, description = "Product not found")
    ),
    params(("id" = Uuid, Path, description = "Product id")),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_service.delete(user.0.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
