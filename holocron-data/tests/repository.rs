use std::time::Duration;

use holocron_core::HttpError;
use holocron_data::{
    count_on, exists_on, DataError, Entity, ReadRepository, SqlxErrorExt, SqlxRepository, Tx,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
struct Starship {
    id: i64,
    name: String,
    class: Option<String>,
}

impl Entity for Starship {
    type Id = i64;

    fn table_name() -> &'static str {
        "starship"
    }

    fn display_name() -> &'static str {
        "Starship"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "class"]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

async fn setup() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE starship (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE, class TEXT)",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO starship (id, name, class) VALUES \
         (2, 'Millennium Falcon', 'Light freighter'), (1, 'X-wing', NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool
}

#[tokio::test]
async fn test_find_all_orders_by_id() {
    let repo = SqlxRepository::<Starship, Sqlite>::new(setup().await);
    let ships = repo.find_all().await.unwrap();
    assert_eq!(ships.len(), 2);
    assert_eq!(ships[0].name, "X-wing");
    assert_eq!(ships[0].class, None);
    assert_eq!(ships[1].class.as_deref(), Some("Light freighter"));
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = SqlxRepository::<Starship, Sqlite>::new(setup().await);
    let falcon = repo.find_by_id(&2).await.unwrap().unwrap();
    assert_eq!(falcon.name, "Millennium Falcon");
    assert!(repo.find_by_id(&99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_exists_and_count_on_connection() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();
    assert!(exists_on::<Starship>(&mut conn, 1).await.unwrap());
    assert!(!exists_on::<Starship>(&mut conn, 99).await.unwrap());
    assert_eq!(count_on::<Starship>(&mut conn).await.unwrap(), 2);
}

async fn count(pool: &SqlitePool) -> u64 {
    let mut conn = pool.acquire().await.unwrap();
    count_on::<Starship>(&mut conn).await.unwrap()
}

#[tokio::test]
async fn test_tx_release_commits_or_rolls_back() {
    let pool = setup().await;

    let mut tx = Tx::begin(&pool).await.unwrap();
    sqlx::query("INSERT INTO starship (name) VALUES ('TIE fighter')")
        .execute(tx.as_mut())
        .await
        .unwrap();
    tx.release(false).await.unwrap();
    assert_eq!(count(&pool).await, 2);

    let mut tx = Tx::begin(&pool).await.unwrap();
    sqlx::query("INSERT INTO starship (name) VALUES ('TIE fighter')")
        .execute(tx.as_mut())
        .await
        .unwrap();
    tx.release(true).await.unwrap();
    assert_eq!(count(&pool).await, 3);
}

#[tokio::test]
async fn test_tx_sees_its_own_writes() {
    let pool = setup().await;

    let mut tx = Tx::begin_immediate(&pool).await.unwrap();
    sqlx::query("INSERT INTO starship (id, name) VALUES (7, 'A-wing')")
        .execute(tx.as_mut())
        .await
        .unwrap();
    assert!(exists_on::<Starship>(tx.as_mut(), 7).await.unwrap());
    tx.release(false).await.unwrap();

    assert_eq!(count(&pool).await, 2);
}

#[tokio::test]
async fn test_immediate_tx_blocks_a_second_writer() {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("fleet.db"))
        .create_if_missing(true)
        .busy_timeout(Duration::from_millis(50));
    let pool = SqlitePoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE starship (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE, class TEXT)")
        .execute(&pool)
        .await
        .unwrap();

    let first = Tx::begin_immediate(&pool).await.unwrap();
    // The write lock is already held, so a second writer cannot even start.
    assert!(Tx::begin_immediate(&pool).await.is_err());
    first.release(true).await.unwrap();

    let second = Tx::begin_immediate(&pool).await.unwrap();
    second.release(true).await.unwrap();
}

#[tokio::test]
async fn test_unique_violation_maps_to_conflict() {
    let pool = setup().await;
    let err = sqlx::query("INSERT INTO starship (name) VALUES ('X-wing')")
        .execute(&pool)
        .await
        .unwrap_err()
        .into_data_error();
    assert!(matches!(err, DataError::Conflict(_)), "got {err}");
    assert!(matches!(HttpError::from(err), HttpError::Conflict(_)));
}

#[tokio::test]
async fn test_row_not_found_maps_to_not_found() {
    let pool = setup().await;
    let err = sqlx::query("SELECT id FROM starship WHERE id = 42")
        .fetch_one(&pool)
        .await
        .map(|_| ())
        .unwrap_err()
        .into_data_error();
    assert!(matches!(err, DataError::NotFound(_)));
}
