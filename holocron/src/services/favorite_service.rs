use std::marker::PhantomData;

use holocron_data::entity::quote;
use holocron_data::{exists_on, DataError, Entity, SqlxErrorExt, Tx};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{FavoriteRelation, ReferenceEntity, User};

/// Manages the `fav_*` join table of one reference kind.
///
/// Favorites are scoped by an optional user: `None` is the shared scope the
/// API uses when no `user_id` is given. Each scope holds at most one favorite
/// per entity.
pub struct FavoriteService<T> {
    pool: SqlitePool,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for FavoriteService<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: ReferenceEntity> FavoriteService<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    /// Mark `entity_id` as a favorite in the given scope.
    ///
    /// Fails with `NotFound` when the entity (or the user) does not exist and
    /// with `Conflict` when the scope already holds it.
    pub async fn add(
        &self,
        entity_id: i64,
        user_id: Option<i64>,
    ) -> Result<FavoriteRelation<T>, AppError> {
        let mut tx = Tx::begin_immediate(&self.pool).await?;
        let result = self.insert(tx.as_mut(), entity_id, user_id).await;
        tx.release(result.is_ok()).await?;

        let favorite = result?;
        info!(
            kind = T::table_name(),
            entity_id,
            user_id = ?user_id,
            favorite_id = favorite.id,
            "Favorite added"
        );
        Ok(favorite)
    }

    /// Remove the favorite for `entity_id` in the given scope.
    pub async fn remove(&self, entity_id: i64, user_id: Option<i64>) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND user_id IS ?",
            quote(T::favorite_table()),
            quote(T::favorite_column()),
        );

        let mut tx = Tx::begin_immediate(&self.pool).await?;
        let result = sqlx::query(&sql)
            .bind(entity_id)
            .bind(user_id)
            .execute(tx.as_mut())
            .await;
        let removed = match result {
            Ok(done) => done.rows_affected(),
            Err(err) => {
                tx.release(false).await?;
                return Err(err.into());
            }
        };
        tx.release(removed > 0).await?;

        if removed == 0 {
            return Err(AppError::NotFound(format!(
                "{} favorite not found",
                T::display_name()
            )));
        }
        info!(kind = T::table_name(), entity_id, user_id = ?user_id, "Favorite removed");
        Ok(())
    }

    /// Favorites of one user, or every favorite of this kind when `user_id` is `None`.
    pub async fn list(&self, user_id: Option<i64>) -> Result<Vec<FavoriteRelation<T>>, AppError> {
        let mut sql = format!(
            "SELECT id, {} AS entity_id, user_id FROM {}",
            quote(T::favorite_column()),
            quote(T::favorite_table()),
        );
        if user_id.is_some() {
            sql.push_str(" WHERE user_id = ?");
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, (i64, i64, Option<i64>)>(&sql);
        if let Some(user_id) = user_id {
            query = query.bind(user_id);
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(FavoriteRelation::from).collect())
    }

    async fn insert(
        &self,
        conn: &mut SqliteConnection,
        entity_id: i64,
        user_id: Option<i64>,
    ) -> Result<FavoriteRelation<T>, AppError> {
        if !exists_on::<T>(&mut *conn, entity_id).await? {
            return Err(AppError::NotFound(format!(
                "{} not found",
                T::display_name()
            )));
        }
        if let Some(user_id) = user_id {
            if !exists_on::<User>(&mut *conn, user_id).await? {
                return Err(AppError::NotFound("User not found".into()));
            }
        }

        let lookup = format!(
            "SELECT id FROM {} WHERE {} = ? AND user_id IS ?",
            quote(T::favorite_table()),
            quote(T::favorite_column()),
        );
        let existing: Option<i64> = sqlx::query_scalar(&lookup)
            .bind(entity_id)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await?;
        if let Some(existing) = existing {
            debug!(kind = T::table_name(), entity_id, existing, "Favorite already present");
            return Err(self.already_favorite());
        }

        let insert = format!(
            "INSERT INTO {} ({}, user_id) VALUES (?, ?) RETURNING id",
            quote(T::favorite_table()),
            quote(T::favorite_column()),
        );
        let id: i64 = sqlx::query_scalar(&insert)
            .bind(entity_id)
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| match err.into_data_error() {
                // Lost a race with a concurrent add in the same scope.
                DataError::Conflict(_) => self.already_favorite(),
                other => other.into(),
            })?;

        Ok(FavoriteRelation::new(id, entity_id, user_id))
    }

    fn already_favorite(&self) -> AppError {
        AppError::Conflict(format!("{} already a favorite", T::display_name()))
    }
}
