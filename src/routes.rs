//! Route table

use axum::{routing::get, Router};

use crate::handlers::{categories, comments, health, images, products};
use crate::state::AppState;

/// Assemble the full router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/categories/{id}",
            get(categories::get_one)
                .put(categories::update)
                .delete(categories::remove),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get_one)
                .put(products::update)
                .delete(products::remove),
        )
        .route(
            "/products/{product_id}/images",
            get(images::list).post(images::create),
        )
        .route(
            "/products/{product_id}/images/{id}",
            get(images::get_one)
                .put(images::update)
                .delete(images::remove),
        )
        .route(
            "/products/{product_id}/comments",
            get(comments::list).post(comments::create),
        )
        .route(
            "/products/{product_id}/comments/{id}",
            get(comments::get_one)
                .put(comments::update)
                .delete(comments::remove),
        )
        .with_state(state)
}
