pub mod catalog_controller;
pub mod favorite_controller;
pub mod sitemap_controller;
pub mod user_controller;

use axum::Router;

use crate::models::{Character, Planet, Vehicle};
use crate::state::AppState;

/// Every application route, without the health endpoints.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(sitemap_controller::routes())
        .merge(catalog_controller::routes::<Character>())
        .merge(catalog_controller::routes::<Planet>())
        .merge(catalog_controller::routes::<Vehicle>())
        .merge(favorite_controller::routes::<Character>())
        .merge(favorite_controller::routes::<Planet>())
        .merge(favorite_controller::routes::<Vehicle>())
        .merge(favorite_controller::overview_routes())
        .merge(user_controller::routes())
}
