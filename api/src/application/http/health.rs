use axum::{Router, extract::State, routing::get};
use skifield_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use tracing::warn;
use utoipa::OpenApi;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Storage health",
    description = "Reports whether the ski field storage is reachable.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = ErrorResponse),
    )
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if !status.healthy {
        warn!(backend = %status.backend, "storage is not healthy");
        return Err(ApiError::ServiceUnavailable(format!(
            "Storage backend '{}' is not reachable.",
            status.backend
        )));
    }

    Ok(Response::OK(status))
}
