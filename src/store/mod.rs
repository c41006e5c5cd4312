//! In-memory entity store
//!
//! The store sits behind the `Resource` trait's table accessor so the
//! handlers never touch it directly; swapping in a database-backed store
//! means reimplementing [`Table`]'s surface, not the handlers.

mod error;
mod table;

pub use error::{StoreError, StoreOperation};
pub use table::Table;

use crate::models::{Category, Product, ProductComment, ProductImage, User};

/// All catalog tables plus the seeded user registry
pub struct CatalogStore {
    pub categories: Table<Category>,
    pub products: Table<Product>,
    pub images: Table<ProductImage>,
    pub comments: Table<ProductComment>,
    pub users: Table<User>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            categories: Table::new(),
            products: Table::new(),
            images: Table::new(),
            comments: Table::new(),
            users: Table::new(),
        }
    }

    /// Seed the user registry
    ///
    /// Users are owned by an external identity service; they exist here only
    /// so comment foreign keys can resolve.
    pub async fn seed_users<I>(&self, usernames: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for username in usernames {
            let username = username.into();
            let user = self.users.insert(|id| User { id, username }).await;
            tracing::debug!(user_id = user.id, username = %user.username, "seeded user");
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
