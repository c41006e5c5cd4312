//! Error types for the service
//!
//! Two layers: [`ServiceError`] covers startup concerns (configuration,
//! binding the listener), while [`ApiError`] is the closed set of request
//! failures. Every `ApiError` variant renders as a 400 envelope; the variants
//! exist so callers and tests can tell the outcomes apart programmatically,
//! not so clients see different status codes.

use thiserror::Error;

use crate::store::StoreError;
use crate::validate::ValidationErrors;

/// Startup and infrastructure errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration loading or parsing failed
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error (e.g. binding the listener)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ServiceError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Request-level failures, one variant per failure class
///
/// The envelope layer in `handlers::crud` owns the mapping to wire messages;
/// this type deliberately carries no entity or operation context.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not a JSON object
    #[error("JSON decode error!")]
    Decode,

    /// Lookup by id (or id + ancestor) missed
    #[error("record not found")]
    NotFound,

    /// One or more fields failed validation
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// The store rejected a write
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Deletion refused by the entity's referential integrity policy
    #[error("{0}")]
    DeleteRestricted(String),
}
