//! User registry entry
//!
//! Users are owned by an external identity service; the catalog only needs
//! them as foreign-key targets for comments, so there is no `Resource` impl
//! and no write surface beyond startup seeding.

use serde::{Deserialize, Serialize};

/// A seeded user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}
