//! HTTP handlers
//!
//! One thin module per entity binding axum extractors to the generic
//! operations in [`crud`], plus the health probe.

pub mod categories;
pub mod comments;
pub mod crud;
pub mod health;
pub mod images;
pub mod products;
