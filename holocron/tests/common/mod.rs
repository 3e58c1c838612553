#![allow(dead_code)]

use holocron::seed::SeedData;
use holocron::state::AppState;
use holocron::{app, db};
use holocron_core::{ConfigValue, HolocronConfig};
use holocron_test::TestApp;
use sqlx::SqlitePool;

pub const FIXTURES: &str = r#"
characters:
  - { id: 1, name: Luke Skywalker, height: "172", birth_year: 19BBY, gender: male, homeworld: Tatooine }
  - { id: 4, name: Darth Vader, height: "202", birth_year: 41.9BBY, gender: male, homeworld: Tatooine }
  - { id: 5, name: Leia Organa, height: "150", birth_year: 19BBY, gender: female, homeworld: Alderaan }
planets:
  - { id: 1, planet_name: Tatooine, gravity: 1 standard, population: "200000", climate: arid }
  - { id: 2, planet_name: Alderaan, gravity: 1 standard, population: "2000000000", climate: temperate }
  - { id: 4, planet_name: Hoth, gravity: 1.1 standard, population: unknown, climate: frozen }
vehicles:
  - { id: 4, vehicle_name: Sand Crawler, model: Digger Crawler, vehicle_class: wheeled, manufacturer: Corellia Mining Corporation }
  - { id: 14, vehicle_name: Snowspeeder, model: t-47 airspeeder, vehicle_class: airspeeder }
"#;

pub fn test_config() -> HolocronConfig {
    config_for("sqlite::memory:")
}

pub fn config_for(url: &str) -> HolocronConfig {
    let mut config = HolocronConfig::empty();
    config.set("database.url", ConfigValue::String(url.into()));
    config
}

/// Fresh in-memory database with the schema applied and nothing else.
pub async fn empty_pool() -> SqlitePool {
    let pool = db::connect(&test_config()).await.unwrap();
    db::migrate(&pool).await.unwrap();
    pool
}

/// Application over a migrated in-memory database holding [`FIXTURES`].
pub async fn setup() -> (TestApp, SqlitePool) {
    setup_with(test_config()).await
}

/// Same as [`setup`], against the database `config` points at.
pub async fn setup_with(config: HolocronConfig) -> (TestApp, SqlitePool) {
    let pool = db::connect(&config).await.unwrap();
    db::migrate(&pool).await.unwrap();
    SeedData::from_yaml_str(FIXTURES)
        .unwrap()
        .apply(&pool)
        .await
        .unwrap();
    let state = AppState::new(pool.clone(), config);
    (TestApp::new(app(state)), pool)
}

/// Register a user over HTTP and return its id.
pub async fn create_user(app: &TestApp, username: &str, email: &str) -> i64 {
    let resp = app
        .post("/users")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": "may-the-force",
        }))
        .send()
        .await
        .assert_ok();
    resp.json::<serde_json::Value>()["id"].as_i64().unwrap()
}
