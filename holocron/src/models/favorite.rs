use std::marker::PhantomData;

use holocron_data::Entity;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

use super::{Character, Planet, Vehicle};

/// A read-only reference kind (character, planet, vehicle) that users can
/// mark as a favorite.
///
/// Ties the entity table to its `fav_*` join table and the foreign-key
/// column inside it.
pub trait ReferenceEntity:
    Entity<Id = i64> + for<'r> FromRow<'r, SqliteRow> + Serialize + Clone
{
    /// Path segment of the collection endpoint (`/characters`).
    fn collection() -> &'static str;

    fn favorite_table() -> &'static str;

    /// Foreign-key column pointing at the entity, also used as the JSON field name.
    fn favorite_column() -> &'static str;
}

/// One row of a `fav_*` table.
///
/// Serialized with the kind-specific key: `{"id": 1, "character_id": 5, "user_id": null}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteRelation<T> {
    pub id: i64,
    pub entity_id: i64,
    pub user_id: Option<i64>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> FavoriteRelation<T> {
    pub fn new(id: i64, entity_id: i64, user_id: Option<i64>) -> Self {
        Self {
            id,
            entity_id,
            user_id,
            _kind: PhantomData,
        }
    }
}

impl<T> From<(i64, i64, Option<i64>)> for FavoriteRelation<T> {
    fn from((id, entity_id, user_id): (i64, i64, Option<i64>)) -> Self {
        Self::new(id, entity_id, user_id)
    }
}

impl<T: ReferenceEntity> Serialize for FavoriteRelation<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FavoriteRelation", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field(T::favorite_column(), &self.entity_id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.end()
    }
}

/// Optional `?user_id=` query parameter selecting whose favorite is meant.
/// Absent means the shared, user-less scope.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FavoriteScope {
    pub user_id: Option<i64>,
}

/// Favorites of every kind, grouped.
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesOverview {
    pub characters: Vec<FavoriteRelation<Character>>,
    pub planets: Vec<FavoriteRelation<Planet>>,
    pub vehicles: Vec<FavoriteRelation<Vehicle>>,
}
