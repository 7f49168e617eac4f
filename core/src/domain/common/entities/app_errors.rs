use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Ski field '{0}' was not found.")]
    NotFound(String),

    #[error("Ski field '{0}' already exists.")]
    NameAlreadyExists(String),

    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unable to parse query payload: {0}")]
    MalformedQuery(String),

    #[error("Storage is unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
