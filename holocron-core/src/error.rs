use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Helper to create a JSON error response with a standard `{ "error": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

/// Errors surfaced to HTTP clients.
///
/// `Conflict` maps to `400 Bad Request`: a duplicate favorite is reported the
/// same way as any other rejected request body.
pub enum HttpError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) | HttpError::Conflict(_) => StatusCode::BAD_REQUEST,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            HttpError::NotFound(msg) | HttpError::BadRequest(msg) | HttpError::Conflict(msg) => {
                error_response(status, msg)
            }
            HttpError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed with an internal error");
                error_response(status, "Internal server error")
            }
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            HttpError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            HttpError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::fmt::Debug for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for HttpError {}
