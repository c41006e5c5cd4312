//! Product handlers

use axum::extract::{Path, State};

use crate::handlers::crud::{self, Body};
use crate::models::Product;
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResponse {
    crud::list::<Product>(&state, None).await
}

pub async fn create(State(state): State<AppState>, body: Body) -> ApiResponse {
    crud::create::<Product>(&state, body).await
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    crud::get_one::<Product>(&state, None, id).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Body,
) -> ApiResponse {
    crud::update::<Product>(&state, None, id, body).await
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    crud::delete::<Product>(&state, None, id).await
}
