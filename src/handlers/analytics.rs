// src/handlers/analytics.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser,
    models::analytics::AnalyticsSummary,
};

// GET /api/analytics/summary
//
// The summary spans the whole platform rather than the caller's holdings;
// authentication gates access, not scope.
#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Project status, revenue and yield breakdowns for the dashboard", body = AnalyticsSummary),
        (status = 401, description = "Not authenticated")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.analytics_service.summary().await?;

    Ok((StatusCode::OK, Json(summary)))
}
