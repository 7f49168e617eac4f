use axum::extract::{Path, State};
use skifield_core::domain::ski_field::{
    ports::SkiFieldService,
    value_objects::{SkiFieldResponse, UpdateSkiFieldInput},
};

use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::ski_field::validators::SkiFieldValidator;

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "ski-field",
    summary = "Update ski field",
    description = "Replaces every field of an existing ski field.",
    responses(
        (status = 200, body = SkiFieldResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
    ),
    params(
        ("id" = String, Path, description = "Ski field public id"),
    ),
    request_body = SkiFieldValidator
)]
pub async fn update_ski_field(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SkiFieldValidator>,
) -> Result<Response<SkiFieldResponse>, ApiError> {
    let ski_field = state
        .service
        .update_ski_field(UpdateSkiFieldInput {
            uid: id,
            fields: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ski_field))
}
