use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use garde::Validate;
use holocron_data::{DataError, ReadRepository, SqlxErrorExt, SqlxRepository};
use sqlx::{Sqlite, SqlitePool};

use crate::error::AppError;
use crate::models::{NewUser, User};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
    repo: SqlxRepository<User, Sqlite>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqlxRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    /// Register a user. The password is stored as an argon2 hash.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        new_user
            .validate()
            .map_err(|report| AppError::Validation(report.to_string()))?;

        let NewUser {
            username,
            email,
            password,
        } = new_user;
        let password_hash = hash_password(password).await?;

        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO "user" (username, email, password) VALUES (?, ?, ?) RETURNING id"#,
        )
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err.into_data_error() {
            DataError::Conflict(_) => AppError::Conflict("Email already registered".into()),
            other => other.into(),
        })?;

        tracing::info!(user_id = id, %username, "User created");
        Ok(User {
            id,
            username,
            email,
        })
    }
}

/// Hash on a blocking thread; argon2 is deliberately slow.
async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
    })
    .await
    .map_err(|e| AppError::Internal(format!("password hashing task failed: {e}")))?
}
