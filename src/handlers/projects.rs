// src/handlers/projects.rs

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
    models::project::{CreateProjectPayload, Project, UpdateProjectPayload},
};

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "Projects across all the farmer's sites, newest first", body = Vec<Project>),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let projects = app_state.project_service.list(user.0.id).await?;

    Ok((StatusCode::OK, Json(projects)))
}

// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 201, description = "Project created on one of the farmer's sites", body = Project),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Target site belongs to another farmer")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_project(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let project = app_state.project_service.create(user.0.id, payload).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

// GET /api/projects/{id}
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    responses(
        (status = 200, description = "One of the farmer's projects", body = Project),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such project on the farmer's sites")
    ),
    params(("id" = Uuid, Path, description = "Project id")),
    security(("api_jwt" = []))
)]
pub async fn get_project(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let project = app_state.project_service.retrieve(user.0.id, id).await?;

    Ok((StatusCode::OK, Json(project)))
}

// PUT /api/projects/{id}
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projects",
    request_body = UpdateProjectPayload,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "One or more fields are invalid"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Project or target site belongs to another farmer"),
        (status = 404, description = "Project not found")
    ),
    params(("id" = Uuid, Path, description = "Project id")),
    security(("api_jwt" = []))
)]
pub async fn update_project(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let project = app_state
        .project_service
        .update(user.0.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

// DELETE /api/projects/{id}
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projects",
    responses(
        (status = 204, description = "Project deleted along with its products"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Project belongs to another farmer"),
        (status = 404, description = "Project not found")
    ),
    params(("id" = Uuid, Path, description = "Project id")),
    security(("api_jwt" = []))
)]
pub async fn delete_project(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.project_service.delete(user.0.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
