use axum::extract::FromRef;
use holocron_core::HolocronConfig;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Character, FavoritesOverview, Planet, Vehicle};
use crate::services::{CatalogService, FavoriteService, UserService};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: HolocronConfig,
    pub characters: CatalogService<Character>,
    pub planets: CatalogService<Planet>,
    pub vehicles: CatalogService<Vehicle>,
    pub character_favorites: FavoriteService<Character>,
    pub planet_favorites: FavoriteService<Planet>,
    pub vehicle_favorites: FavoriteService<Vehicle>,
    pub users: UserService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: HolocronConfig) -> Self {
        Self {
            characters: CatalogService::new(pool.clone()),
            planets: CatalogService::new(pool.clone()),
            vehicles: CatalogService::new(pool.clone()),
            character_favorites: FavoriteService::new(pool.clone()),
            planet_favorites: FavoriteService::new(pool.clone()),
            vehicle_favorites: FavoriteService::new(pool.clone()),
            users: UserService::new(pool.clone()),
            pool,
            config,
        }
    }

    /// Favorites of every kind in one scope (`None` lists all of them).
    pub async fn favorites_of(&self, user_id: Option<i64>) -> Result<FavoritesOverview, AppError> {
        Ok(FavoritesOverview {
            characters: self.character_favorites.list(user_id).await?,
            planets: self.planet_favorites.list(user_id).await?,
            vehicles: self.vehicle_favorites.list(user_id).await?,
        })
    }
}
