// src/handlers/sites.rs

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
    models::site::{CreateSitePayload, Site, UpdateSitePayload},
};

// GET /api/sites
#[utoipa::path(
    get,
    path = "/api/sites",
    tag = "Sites",
    responses(
        (status = 200, description = "Sites owned by the authenticated farmer, newest first", body = Vec<Site>),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_sites(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let sites = app_state.site_service.list(user.0.id).await?;

    Ok((StatusCode::OK, Json(sites)))
}

// POST /api/sites
#[utoipa::path(
    post,
    path = "/api/sites",
    tag = "Sites",
    request_body = CreateSitePayload,
    responses(
        (status = 201, description = "Site created for the authenticated farmer", body = Site),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_site(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSitePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let site = app_state.site_service.create(user.0.id, payload).await?;

    Ok((StatusCode::CREATED, Json(site)))
}

// GET /api/sites/{id}
#[utoipa::path(
    get,
    path = "/api/sites/{id}",
    tag = "Sites",
    responses(
        (status = 200, description = "One of the farmer's sites", body = Site),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such site in the farmer's holdings")
    ),
    params(("id" = Uuid, Path, description = "Site id")),
    security(("api_jwt" = []))
)]
pub async fn get_site(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let site = app_state.site_service.retrieve(user.0.id, id).await?;

    Ok((StatusCode::OK, Json(site)))
}

// PUT /api/sites/{id}
#[utoipa::path(
    put,
    path = "/api/sites/{id}",
    tag = "Sites",
    request_body = UpdateSitePayload,
    responses(
        (status = 200, description = "Updated site", body = Site),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Site belongs to another farmer"),
        (status = 404, description = "Site not found")
    ),
    params(("id" = Uuid, Path, description = "Site id")),
    security(("api_jwt" = []))
)]
pub async fn update_site(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSitePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let site = app_state.site_service.update(user.0.id, id, payload).await?;

    Ok((StatusCode::OK, Json(site)))
}

// DELETE /api/sites/{id}
#[utoipa::path(
    delete,
    path = "/api/sites/{id}",
    tag = "Sites",
    responses(
        (status = 204, description = "Site deleted along with its projects and products"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Site belongs to another farmer"),
        (status = 404, description = "Site not found")
    ),
    params(("id" = Uuid, Path, description = "Site id")),
    security(("api_jwt" = []))
)]
pub async fn delete_site(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.site_service.delete(user.0.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
