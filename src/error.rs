use axum::http::StatusCode;

/// A 400 that carries the entity and machine-readable key a client can branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub entity_name: &'static str,
    pub error_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", .0.message)]
    Validation(ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn validation(
        message: impl Into<String>,
        entity_name: &'static str,
        error_key: impl Into<String>,
    ) -> Self {
        Self::Validation(ValidationError {
            message: message.into(),
            entity_name,
            error_key: error_key.into(),
        })
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::UnsupportedMediaType(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(err) => err.message.as_str(),
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::MethodNotAllowed(message)
            | Self::UnsupportedMediaType(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_key(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => Some(err.error_key.as_str()),
            _ => None,
        }
    }
}
