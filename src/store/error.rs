//! Store error type

use std::fmt;

use thiserror::Error;

/// Store operations that can fail
///
/// Inserts are absent: the in-memory tables assign fresh ids, so only
/// writes against an existing row can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Update => "update",
            Self::Delete => "delete",
        };
        write!(f, "{op}")
    }
}

/// A write the store could not carry out
///
/// With the in-memory tables this only happens when a record vanishes between
/// the handler's lookup and its write; a database-backed store would surface
/// its own failures through the same type.
#[derive(Debug, Clone, Error)]
#[error("store error during {operation}: {message}")]
pub struct StoreError {
    /// Which operation failed
    pub operation: StoreOperation,

    /// What went wrong
    pub message: String,
}

impl StoreError {
    /// The target record no longer exists
    pub fn vanished(operation: StoreOperation, id: i64) -> Self {
        Self {
            operation,
            message: format!("record {id} no longer exists"),
        }
    }
}
