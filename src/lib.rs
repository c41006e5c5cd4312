//! # catalog-service
//!
//! CRUD API backend for an e-commerce product catalog: categories, products,
//! product images, and product comments, each exposed through collection and
//! detail endpoints.
//!
//! Every handler runs the same pipeline: decode the request body, resolve
//! referenced entities by primary key, validate field presence and types,
//! persist or mutate, and wrap the outcome in the uniform
//! `{message, status, data}` envelope. The pipeline is written once in
//! [`handlers::crud`], generic over the [`resource::Resource`] trait; the
//! per-entity modules only bind path/state extraction to it.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use catalog_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ServiceError> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let state = AppState::new(config.clone());
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod resource;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod validate;

/// Commonly used types for building and running the service
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ApiError, ServiceError};
    pub use crate::observability::init_tracing;
    pub use crate::resource::Resource;
    pub use crate::response::ApiResponse;
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::CatalogStore;

    pub use tracing::{debug, error, info, warn};
}
