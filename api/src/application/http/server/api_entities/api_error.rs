use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use skifield_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("One or more validation errors occurred.")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Problem-details style error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::Validation(_) => "Validation Failed",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Conflict(_) => "Conflict",
            ApiError::ServiceUnavailable(_) => "Service Unavailable",
            ApiError::InternalServerError(_) => "Internal Server Error",
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            title: self.title().to_string(),
            status: self.status().as_u16(),
            detail: self.to_string(),
            errors: match self {
                ApiError::Validation(errors) => Some(errors.clone()),
                _ => None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { field, message } => {
                ApiError::Validation(BTreeMap::from([(field, vec![message])]))
            }
            CoreError::MalformedQuery(_) => ApiError::BadRequest(error.to_string()),
            CoreError::NotFound(_) => ApiError::NotFound(error.to_string()),
            CoreError::NameAlreadyExists(_) => ApiError::Conflict(error.to_string()),
            CoreError::ServiceUnavailable => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("An unexpected error occurred.".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| {
                        error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| error.code.to_string())
                    })
                    .collect();
                (camel_case(&field), messages)
            })
            .collect();

        ApiError::Validation(field_errors)
    }
}

/// JSON body extractor that runs the `validator` rules after deserializing.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let value: T = deserialize_body(raw)?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}

/// Deserializes a JSON body, reporting missing or mistyped fields against
/// their JSON path.
pub fn deserialize_body<T: DeserializeOwned>(raw: serde_json::Value) -> Result<T, ApiError> {
    serde_path_to_error::deserialize(raw).map_err(|error| {
        let path = error.path().to_string();
        let message = error.into_inner().to_string();

        let field = match path.as_str() {
            "." => missing_field(&message),
            _ => Some(path),
        };

        match field {
            Some(field) => ApiError::Validation(BTreeMap::from([(field, vec![message])])),
            None => ApiError::BadRequest(message),
        }
    })
}

fn missing_field(message: &str) -> Option<String> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
        .map(str::to_string)
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::NotFound("abc".to_string()), StatusCode::NOT_FOUND),
            (
                CoreError::NameAlreadyExists("Vail".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                CoreError::validation("name", "is required"),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::MalformedQuery("eof".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ServiceUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn conflict_body_carries_the_domain_message() {
        let body = ApiError::from(CoreError::NameAlreadyExists("Vail".to_string())).body();

        assert_eq!(body.title, "Conflict");
        assert_eq!(body.status, 409);
        assert_eq!(body.detail, "Ski field 'Vail' already exists.");
        assert_eq!(body.errors, None);
    }

    #[test]
    fn validation_body_lists_field_errors() {
        let body = ApiError::from(CoreError::validation("countryCode", "must be a 3-letter code"))
            .body();

        let errors = body.errors.unwrap();
        assert_eq!(
            errors["countryCode"],
            vec!["must be a 3-letter code".to_string()]
        );
        assert_eq!(body.status, 400);
    }

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Resort {
        name: String,
        lift_count: u32,
    }

    fn field_errors(error: ApiError) -> FieldErrors {
        match error {
            ApiError::Validation(errors) => errors,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_reported_by_its_json_name() {
        let error = deserialize_body::<Resort>(serde_json::json!({ "name": "Ohau" })).unwrap_err();

        let errors = field_errors(error);
        assert_eq!(errors["liftCount"], vec!["missing field `liftCount`".to_string()]);
    }

    #[test]
    fn mistyped_field_is_reported_by_its_json_name() {
        let error =
            deserialize_body::<Resort>(serde_json::json!({ "name": "Ohau", "liftCount": "four" }))
                .unwrap_err();

        let errors = field_errors(error);
        assert!(errors.contains_key("liftCount"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn body_of_the_wrong_shape_is_a_bad_request() {
        let error = deserialize_body::<Resort>(serde_json::json!("Ohau")).unwrap_err();

        assert!(matches!(error, ApiError::BadRequest(_)));
    }

    #[test]
    fn camel_case_converts_snake_case_fields() {
        assert_eq!(camel_case("full_day_pass_price"), "fullDayPassPrice");
        assert_eq!(camel_case("name"), "name");
    }
}
