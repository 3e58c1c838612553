//! # holocron-data
//!
//! SQLx-backed data access for Holocron.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Entity`] | Table metadata for a row type (table, id column, columns) |
//! | [`ReadRepository`] | Async read access: `find_by_id`, `find_all` |
//! | [`exists_on`] / [`count_on`] | Existence and count checks on an explicit connection |
//! | [`SqlxRepository`] | `ReadRepository` over an `sqlx::Pool<Sqlite>` |
//! | [`Tx`] | Transaction wrapper: commit on success, rollback on drop |
//! | [`DataError`] | Data-layer error, convertible into `HttpError` |
//! | [`SqlxErrorExt`] | `sqlx::Error` → `DataError` (`.into_data_error()`) |

pub mod entity;
pub mod error;
pub mod repository;
pub mod tx;

pub use entity::Entity;
pub use error::{DataError, SqlxErrorExt};
pub use repository::{count_on, exists_on, ReadRepository, SqlxRepository};
pub use tx::Tx;

