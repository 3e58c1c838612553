use holocron_core::HttpError;

/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    /// A unique constraint rejected the write.
    Conflict(String),
    Database(Box<dyn std::error::Error + Send + Sync>),
    Other(String),
}

impl DataError {
    /// Construct a `Database` variant from any driver error.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DataError> for HttpError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => HttpError::NotFound(msg),
            DataError::Conflict(msg) => HttpError::Conflict(msg),
            DataError::Database(e) => HttpError::Internal(e.to_string()),
            DataError::Other(msg) => HttpError::Internal(msg),
        }
    }
}

/// Extension trait for converting `sqlx::Error` into `DataError`.
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        match &self {
            sqlx::Error::RowNotFound => DataError::NotFound("Row not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DataError::Conflict(db.message().to_string())
            }
            _ => DataError::database(self),
        }
    }
}
