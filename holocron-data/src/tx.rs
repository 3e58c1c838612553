//! Transaction wrapper with explicit commit-or-rollback release.

use sqlx::{Database, Pool, Sqlite, Transaction};
use std::ops::{Deref, DerefMut};

use crate::error::{DataError, SqlxErrorExt};

/// A wrapper around an SQLx [`Transaction`].
///
/// - [`Tx::begin`] starts a transaction from a pool
/// - [`Tx::release`] with `true` commits it
/// - `release(false)` or dropping the value rolls it back
///
/// ```ignore
/// let mut tx = Tx::begin(&pool).await?;
/// let result = insert_favorite(&mut tx, id).await;
/// tx.release(result.is_ok()).await?;
/// result
/// ```
pub struct Tx<'a, DB: Database>(pub Transaction<'a, DB>);

impl<'a, DB: Database> Deref for Tx<'a, DB> {
    type Target = Transaction<'a, DB>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, DB: Database> DerefMut for Tx<'a, DB> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<DB: Database> Tx<'static, DB> {
    pub async fn begin(pool: &Pool<DB>) -> Result<Self, DataError> {
        let tx = pool.begin().await.map_err(|e| e.into_data_error())?;
        Ok(Tx(tx))
    }
}

impl Tx<'static, Sqlite> {
    /// Start a write transaction with `BEGIN IMMEDIATE`.
    ///
    /// The write lock is taken up front, so a concurrent writer waits for the
    /// busy timeout instead of failing with `SQLITE_BUSY` when it upgrades
    /// from a read. Use it for read-check-then-write sequences.
    pub async fn begin_immediate(pool: &Pool<Sqlite>) -> Result<Self, DataError> {
        let tx = pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| e.into_data_error())?;
        Ok(Tx(tx))
    }
}

impl<'a, DB: Database> Tx<'a, DB> {
    /// Unwraps the `Tx` into the inner `Transaction`.
    pub fn into_inner(self) -> Transaction<'a, DB> {
        self.0
    }

    /// Returns a mutable reference to the underlying connection.
    pub fn as_mut(&mut self) -> &mut <DB as Database>::Connection {
        &mut *self.0
    }

    /// Commit when `success` is true, otherwise roll back.
    pub async fn release(self, success: bool) -> Result<(), DataError> {
        if success {
            self.into_inner()
                .commit()
                .await
                .map_err(|e| e.into_data_error())?;
        } else {
            tracing::debug!("Rolling back transaction");
            self.into_inner()
                .rollback()
                .await
                .map_err(|e| e.into_data_error())?;
        }
        Ok(())
    }
}
