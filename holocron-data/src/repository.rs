use std::future::Future;
use std::marker::PhantomData;

use sqlx::sqlite::SqliteRow;
use sqlx::{Database, FromRow, Pool, Sqlite, SqliteConnection};

use crate::entity::Entity;
use crate::error::{DataError, SqlxErrorExt};

/// Async read access to a table.
///
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait` needed.
pub trait ReadRepository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    fn find_by_id(&self, id: &ID) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
}

/// Generic repository over an `sqlx::Pool<DB>`, driven by [`Entity`] metadata.
///
/// ```ignore
/// let repo = SqlxRepository::<Planet, Sqlite>::new(pool.clone());
/// let planets = repo.find_all().await?;
/// ```
pub struct SqlxRepository<T, DB: Database> {
    pool: Pool<DB>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, DB: Database> SqlxRepository<T, DB> {
    pub fn new(pool: Pool<DB>) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

impl<T, DB: Database> Clone for SqlxRepository<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> ReadRepository<T, i64> for SqlxRepository<T, Sqlite>
where
    T: Entity<Id = i64> + for<'r> FromRow<'r, SqliteRow>,
{
    async fn find_by_id(&self, id: &i64) -> Result<Option<T>, DataError> {
        let sql = T::select_by_id_sql();
        sqlx::query_as::<_, T>(&sql)
            .bind(*id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| e.into_data_error())
    }

    async fn find_all(&self) -> Result<Vec<T>, DataError> {
        let sql = T::select_all_sql();
        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| e.into_data_error())
    }
}

/// Whether a row with `id` exists, checked on `conn`.
///
/// Takes a connection rather than the pool so it can run inside a [`Tx`](crate::Tx)
/// and see that transaction's writes.
pub async fn exists_on<T: Entity<Id = i64>>(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<bool, DataError> {
    let found: i64 = sqlx::query_scalar(&T::exists_sql())
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(|e| e.into_data_error())?;
    Ok(found != 0)
}

/// Number of rows in `T`'s table, counted on `conn`.
pub async fn count_on<T: Entity>(conn: &mut SqliteConnection) -> Result<u64, DataError> {
    let total: i64 = sqlx::query_scalar(&T::count_sql())
        .fetch_one(conn)
        .await
        .map_err(|e| e.into_data_error())?;
    Ok(total as u64)
}
