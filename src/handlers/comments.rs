//! Product comment handlers, scoped beneath their product

use axum::extract::{Path, State};

use crate::handlers::crud::{self, Body};
use crate::models::ProductComment;
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, Path(product_id): Path<i64>) -> ApiResponse {
    crud::list::<ProductComment>(&state, Some(product_id)).await
}

/// The owning product comes from the body's `product_id`, not the path
pub async fn create(State(state): State<AppState>, body: Body) -> ApiResponse {
    crud::create::<ProductComment>(&state, body).await
}

pub async fn get_one(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(i64, i64)>,
) -> ApiResponse {
    crud::get_one::<ProductComment>(&state, Some(product_id), id).await
}

pub async fn update(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(i64, i64)>,
    body: Body,
) -> ApiResponse {
    crud::update::<ProductComment>(&state, Some(product_id), id, body).await
}

pub async fn remove(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(i64, i64)>,
) -> ApiResponse {
    crud::delete::<ProductComment>(&state, Some(product_id), id).await
}
