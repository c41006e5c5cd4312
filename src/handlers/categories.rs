//! Category handlers

use axum::extract::{Path, State};

use crate::handlers::crud::{self, Body};
use crate::models::Category;
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResponse {
    crud::list::<Category>(&state, None).await
}

pub async fn create(State(state): State<AppState>, body: Body) -> ApiResponse {
    crud::create::<Category>(&state, body).await
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    crud::get_one::<Category>(&state, None, id).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Body,
) -> ApiResponse {
    crud::update::<Category>(&state, None, id, body).await
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResponse {
    crud::delete::<Category>(&state, None, id).await
}
