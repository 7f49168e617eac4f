use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::Deserialize;
use skifield_core::domain::{
    common::entities::app_errors::CoreError, ski_field::value_objects::FindManyRequest,
};
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;

/// URL alternative to the request body.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueryParam {
    /// URL-encoded `FindManyRequest` JSON. Takes precedence over the body.
    pub query: Option<String>,
}

/// Extractor for a [`FindManyRequest`] carried either by the `query` URL
/// parameter or by the JSON body.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     FindManyExtractor(request): FindManyExtractor,
/// ) -> Result<Response<PaginatedResult<SkiFieldResponse>>, ApiError> {
///     // request.filter, request.order_by, request.skip, request.take
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FindManyExtractor(pub FindManyRequest);

impl<S> FromRequest<S> for FindManyExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query_string = req.uri().query().unwrap_or("").to_string();
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let request = parse_find_many(&query_string, &body)?;

        Ok(FindManyExtractor(request))
    }
}

/// Resolves the request from the `query` parameter when it is present and
/// non-blank, otherwise from the body. An empty body is the default request.
pub fn parse_find_many(query_string: &str, body: &[u8]) -> Result<FindManyRequest, CoreError> {
    let params: HashMap<String, String> = serde_urlencoded::from_str(query_string)
        .map_err(|e| CoreError::MalformedQuery(e.to_string()))?;

    if let Some(query) = params.get("query").map(|q| q.trim())
        && !query.is_empty()
    {
        return serde_json::from_str(query).map_err(|e| CoreError::MalformedQuery(e.to_string()));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FindManyRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| CoreError::MalformedQuery(e.to_string()))
}
