use axum::extract::{Path, State};
use skifield_core::domain::ski_field::{ports::SkiFieldService, value_objects::DeleteSkiFieldInput};

use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "ski-field",
    summary = "Delete ski field",
    responses(
        (status = 204),
        (status = 404, body = ErrorResponse),
    ),
    params(
        ("id" = String, Path, description = "Ski field public id"),
    ),
)]
pub async fn delete_ski_field(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_ski_field(DeleteSkiFieldInput { uid: id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
