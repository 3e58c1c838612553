use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::extract::{JsonBody, PathParam};
use crate::models::{FavoritesOverview, NewUser, User};
use crate::services::UserService;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/{id}", get(get_by_id))
        .route("/users/{id}/favorites", get(favorites))
}

async fn list(State(users): State<UserService>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(users.list().await?))
}

async fn get_by_id(
    State(users): State<UserService>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<User>, AppError> {
    Ok(Json(users.get_by_id(id).await?))
}

async fn create(
    State(users): State<UserService>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<Json<User>, AppError> {
    Ok(Json(users.create(body).await?))
}

async fn favorites(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<FavoritesOverview>, AppError> {
    let user = state.users.get_by_id(id).await?;
    Ok(Json(state.favorites_of(Some(user.id)).await?))
}
