//! Reference-data seeding from a YAML document.
//!
//! ```yaml
//! characters:
//!   - { id: 1, name: Luke Skywalker, height: "172", birth_year: 19BBY, gender: male, homeworld: Tatooine }
//! planets:
//!   - { id: 1, planet_name: Tatooine, gravity: 1 standard, population: "200000", climate: arid }
//! vehicles: []
//! ```
//!
//! A table that already holds rows is left untouched.

use std::path::Path;

use holocron_data::entity::quote;
use holocron_data::{count_on, DataError, Entity, SqlxErrorExt, Tx};
use serde::Deserialize;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use crate::models::{Character, Planet, Vehicle};

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Rows inserted per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub characters: usize,
    pub planets: usize,
    pub vehicles: usize,
}

impl SeedData {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DataError> {
        serde_yaml::from_str(yaml).map_err(|e| DataError::Other(format!("invalid seed data: {e}")))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DataError::Other(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    /// Insert everything in one transaction.
    pub async fn apply(&self, pool: &SqlitePool) -> Result<SeedSummary, DataError> {
        let mut tx = Tx::begin_immediate(pool).await?;
        let result = self.insert_all(tx.as_mut()).await;
        tx.release(result.is_ok()).await?;
        let summary = result?;
        tracing::info!(
            characters = summary.characters,
            planets = summary.planets,
            vehicles = summary.vehicles,
            "Reference data seeded"
        );
        Ok(summary)
    }

    async fn insert_all(&self, conn: &mut SqliteConnection) -> Result<SeedSummary, DataError> {
        Ok(SeedSummary {
            characters: seed_table(&mut *conn, &self.characters).await?,
            planets: seed_table(&mut *conn, &self.planets).await?,
            vehicles: seed_table(&mut *conn, &self.vehicles).await?,
        })
    }
}

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Entities that can be written by the seed loader.
pub trait Seed: Entity {
    fn bind_values<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn insert_sql() -> String {
        let columns = Self::columns();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote(Self::table_name()),
            columns.iter().map(|c| quote(c)).collect::<Vec<_>>().join(", "),
            vec!["?"; columns.len()].join(", "),
        )
    }
}

async fn seed_table<T: Seed>(conn: &mut SqliteConnection, rows: &[T]) -> Result<usize, DataError> {
    let present = count_on::<T>(&mut *conn).await?;
    if present > 0 {
        tracing::debug!(table = T::table_name(), present, "Table already populated, skipping seed");
        return Ok(0);
    }

    let sql = T::insert_sql();
    for row in rows {
        row.bind_values(sqlx::query(&sql))
            .execute(&mut *conn)
            .await
            .map_err(|e| e.into_data_error())?;
    }
    Ok(rows.len())
}

impl Seed for Character {
    fn bind_values<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.height)
            .bind(&self.birth_year)
            .bind(&self.gender)
            .bind(&self.homeworld)
    }
}

impl Seed for Planet {
    fn bind_values<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.planet_name)
            .bind(&self.gravity)
            .bind(&self.population)
            .bind(&self.climate)
    }
}

impl Seed for Vehicle {
    fn bind_values<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.vehicle_name)
            .bind(&self.model)
            .bind(&self.vehicle_class)
            .bind(&self.manufacturer)
    }
}
