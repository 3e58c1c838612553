use axum::extract::{FromRef, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::extract::PathParam;
use crate::models::ReferenceEntity;
use crate::services::CatalogService;
use crate::state::AppState;

/// `GET /{collection}` and `GET /{collection}/{id}` for one reference kind.
pub fn routes<T>() -> Router<AppState>
where
    T: ReferenceEntity,
    CatalogService<T>: FromRef<AppState>,
{
    let collection = T::collection();
    Router::new()
        .route(&format!("/{collection}"), get(list::<T>))
        .route(&format!("/{collection}/{{id}}"), get(get_by_id::<T>))
}

async fn list<T: ReferenceEntity>(
    State(service): State<CatalogService<T>>,
) -> Result<Json<Vec<T>>, AppError> {
    Ok(Json(service.list().await?))
}

async fn get_by_id<T: ReferenceEntity>(
    State(service): State<CatalogService<T>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<T>, AppError> {
    Ok(Json(service.get_by_id(id).await?))
}
