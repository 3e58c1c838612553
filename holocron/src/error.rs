use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use holocron_core::HttpError;
use holocron_data::{DataError, SqlxErrorExt};

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// Duplicate favorite or email.
    Conflict(String),
    Validation(String),
    Database(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation failed: {msg}"),
            AppError::Database(msg) => write!(f, "Database error: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(msg) => HttpError::NotFound(msg),
            AppError::Conflict(msg) => HttpError::Conflict(msg),
            AppError::Validation(msg) => HttpError::BadRequest(msg),
            AppError::Database(msg) | AppError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        HttpError::from(self).into_response()
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => AppError::NotFound(msg),
            DataError::Conflict(msg) => AppError::Conflict(msg),
            DataError::Database(e) => AppError::Database(e.to_string()),
            DataError::Other(msg) => AppError::Internal(msg),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        err.into_data_error().into()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
