use std::str::FromStr;

use holocron_core::{HealthIndicator, HealthStatus, HolocronConfig};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:/tmp/holocron.db";

/// Versioned schema, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the pool described by `database.url` / `database.connections`.
///
/// In-memory databases live and die with their connection, so they get a
/// single connection that is never recycled.
pub async fn connect(config: &HolocronConfig) -> Result<SqlitePool, sqlx::Error> {
    let url: String = config.get_or("database.url", DEFAULT_DATABASE_URL.to_string());
    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.get_or("database.connections", 5u32))
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(%url, "Connected to database");
    Ok(pool)
}

/// Apply pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// `SELECT 1` against the pool.
pub struct DbHealth {
    pool: SqlitePool,
}

impl DbHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HealthIndicator for DbHealth {
    fn name(&self) -> &str {
        "db"
    }

    async fn check(&self) -> HealthStatus {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => HealthStatus::Up,
            Err(e) => HealthStatus::Down(e.to_string()),
        }
    }
}
