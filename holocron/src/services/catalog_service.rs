use holocron_data::{ReadRepository, SqlxRepository};
use sqlx::{Sqlite, SqlitePool};

use crate::error::AppError;
use crate::models::ReferenceEntity;

/// Read-only access to one kind of reference entity.
pub struct CatalogService<T> {
    repo: SqlxRepository<T, Sqlite>,
}

impl<T> Clone for CatalogService<T> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<T: ReferenceEntity> CatalogService<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqlxRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<T, AppError> {
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", T::display_name())))
    }
}
