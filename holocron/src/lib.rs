//! Holocron: Star Wars reference data (characters, planets, vehicles) and
//! the favorites users keep of them, served over a JSON REST API.

pub mod controllers;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;

use axum::Router;
use holocron_core::{catch_panic_layer, default_cors, default_trace, HealthBuilder};

use crate::db::DbHealth;
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let health = HealthBuilder::new()
        .check(DbHealth::new(state.pool.clone()))
        .into_router();

    controllers::routes()
        .merge(health)
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(default_cors())
        .layer(default_trace())
}
