use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Routes listed by `GET /`.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /characters",
    "GET /characters/{id}",
    "GET /planets",
    "GET /planets/{id}",
    "GET /vehicles",
    "GET /vehicles/{id}",
    "GET /users",
    "POST /users",
    "GET /users/{id}",
    "GET /users/{id}/favorites",
    "GET /favorites",
    "POST /favorite/character/{id}",
    "DELETE /favorite/character/{id}",
    "POST /favorite/planet/{id}",
    "DELETE /favorite/planet/{id}",
    "POST /favorite/vehicle/{id}",
    "DELETE /favorite/vehicle/{id}",
];

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(sitemap))
}

async fn sitemap() -> Json<Value> {
    Json(json!({ "endpoints": ENDPOINTS }))
}
