use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    Error, HttpRequest,
};

use crate::core::AppError;

/// Map JSON extractor failures onto the API error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected JSON payload");

    let message = match err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        other => format!("Malformed request body: {}", other),
    };

    AppError::Validation(message).into()
}

/// Map query-string extractor failures onto the API error body
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected query string");
    AppError::validation(format!("Malformed query string: {}", err)).into()
}
