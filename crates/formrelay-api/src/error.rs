/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_core::RelayError;
use formrelay_core::constants::{
    MSG_CONFIG_ERROR, MSG_INTERNAL_ERROR, MSG_METHOD_NOT_ALLOWED, MSG_MISSING_FIELDS,
};
use serde_json::json;

/// API Error
///
/// The payload strings carry detail for logs. Only `Upstream` shows its
/// detail to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("EmailJS error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller
    pub fn public_message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed(_) => MSG_METHOD_NOT_ALLOWED.to_string(),
            ApiError::Configuration(_) => MSG_CONFIG_ERROR.to_string(),
            ApiError::Validation(_) => MSG_MISSING_FIELDS.to_string(),
            ApiError::Upstream { status, body } => {
                format!("EmailJS Error: {} - {}", status, body)
            }
            ApiError::Internal(_) => MSG_INTERNAL_ERROR.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.public_message(),
        }));

        (self.status(), body).into_response()
    }
}

/// Convert formrelay-core errors to API errors
impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Config(msg) => ApiError::Configuration(msg),
            RelayError::Validation(msg) => ApiError::Validation(msg),
            RelayError::Upstream { status, body } => ApiError::Upstream { status, body },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MethodNotAllowed("GET".to_string()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Validation("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Upstream {
                status: 429,
                body: "Too many requests".to_string()
            }
            .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_configuration_detail_not_public() {
        let err = ApiError::Configuration("Missing EMAILJS_PRIVATE_KEY".to_string());
        assert_eq!(err.public_message(), "Server configuration error");
        assert!(err.to_string().contains("EMAILJS_PRIVATE_KEY"));
    }

    #[test]
    fn test_internal_detail_not_public() {
        let err = ApiError::Internal("connection refused".to_string());
        assert_eq!(
            err.public_message(),
            "Internal server error occurred while sending email"
        );
    }

    #[test]
    fn test_upstream_message_echoes_body() {
        let err = ApiError::Upstream {
            status: 400,
            body: "Bad template".to_string(),
        };
        assert_eq!(err.public_message(), "EmailJS Error: 400 - Bad template");
    }

    #[test]
    fn test_from_relay_error() {
        assert!(matches!(
            ApiError::from(RelayError::Config("x".to_string())),
            ApiError::Configuration(_)
        ));
        assert!(matches!(
            ApiError::from(RelayError::Transport("x".to_string())),
            ApiError::Internal(_)
        ));
        assert!(matches!(
            ApiError::from(RelayError::Serialization("x".to_string())),
            ApiError::Internal(_)
        ));
    }
}
