use axum::extract::{FromRef, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::extract::{PathParam, QueryParams};
use crate::models::{FavoriteScope, FavoritesOverview, ReferenceEntity};
use crate::services::FavoriteService;
use crate::state::AppState;

/// `POST` / `DELETE /favorite/{kind}/{id}[?user_id=N]` for one reference kind.
pub fn routes<T>() -> Router<AppState>
where
    T: ReferenceEntity,
    FavoriteService<T>: FromRef<AppState>,
{
    Router::new().route(
        &format!("/favorite/{}/{{id}}", T::table_name()),
        post(add::<T>).delete(remove::<T>),
    )
}

/// `GET /favorites[?user_id=N]`.
pub fn overview_routes() -> Router<AppState> {
    Router::new().route("/favorites", get(overview))
}

async fn add<T: ReferenceEntity>(
    State(service): State<FavoriteService<T>>,
    PathParam(id): PathParam<i64>,
    QueryParams(scope): QueryParams<FavoriteScope>,
) -> Result<Json<Value>, AppError> {
    service.add(id, scope.user_id).await?;
    Ok(Json(json!({
        "message": format!("{} favorite added successfully", T::display_name())
    })))
}

async fn remove<T: ReferenceEntity>(
    State(service): State<FavoriteService<T>>,
    PathParam(id): PathParam<i64>,
    QueryParams(scope): QueryParams<FavoriteScope>,
) -> Result<Json<Value>, AppError> {
    service.remove(id, scope.user_id).await?;
    Ok(Json(json!({
        "message": format!("{} favorite deleted successfully", T::display_name())
    })))
}

async fn overview(
    State(state): State<AppState>,
    QueryParams(scope): QueryParams<FavoriteScope>,
) -> Result<Json<FavoritesOverview>, AppError> {
    Ok(Json(state.favorites_of(scope.user_id).await?))
}
