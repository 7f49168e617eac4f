use axum::{
    extract::State,
    http::{HeaderName, header::LOCATION},
};
use skifield_core::domain::ski_field::{
    ports::SkiFieldService,
    value_objects::{CreateSkiFieldInput, SkiFieldResponse},
};

use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::ski_field::validators::SkiFieldValidator;

#[utoipa::path(
    post,
    path = "",
    tag = "ski-field",
    summary = "Create ski field",
    description = "Creates a ski field. Names are unique regardless of case.",
    responses(
        (status = 201, body = SkiFieldResponse, headers(("Location" = String))),
        (status = 400, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
    ),
    request_body = SkiFieldValidator
)]
pub async fn create_ski_field(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SkiFieldValidator>,
) -> Result<([(HeaderName, String); 1], Response<SkiFieldResponse>), ApiError> {
    let ski_field = state
        .service
        .create_ski_field(CreateSkiFieldInput {
            fields: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    let location = format!(
        "{}/api/skifields/{}",
        state.args.server.root_path, ski_field.id
    );

    Ok(([(LOCATION, location)], Response::Created(ski_field)))
}
