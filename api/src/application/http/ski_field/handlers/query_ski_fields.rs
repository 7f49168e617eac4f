use axum::extract::State;
use skifield_core::domain::ski_field::{
    ports::SkiFieldService,
    value_objects::{FindManyRequest, PaginatedResult, SkiFieldResponse},
};

use crate::application::http::query_extractor::{FindManyExtractor, QueryParam};
use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/query",
    tag = "ski-field",
    summary = "Query ski fields",
    description = "Filters, sorts and paginates ski fields. The body may be empty; a JSON \
        `query` parameter in the URL takes precedence over the body.",
    params(QueryParam),
    request_body(
        content = FindManyRequest,
        description = "Optional. An empty body runs the default query.",
        content_type = "application/json"
    ),
    responses(
        (status = 200, body = PaginatedResult<SkiFieldResponse>),
        (status = 400, body = ErrorResponse),
    )
)]
pub async fn query_ski_fields(
    State(state): State<AppState>,
    FindManyExtractor(request): FindManyExtractor,
) -> Result<Response<PaginatedResult<SkiFieldResponse>>, ApiError> {
    let result = state
        .service
        .query_ski_fields(request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
