//! Product comment entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, JsonMap, Resource};
use crate::store::{CatalogStore, Table};
use crate::validate::{unresolved_fk, Fields, ValidationErrors};

/// A user comment on a product, optionally replying to another comment
///
/// `parent_id` is type-checked only; it is not resolved for existence or
/// cycle-freedom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComment {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub rating: f64,
    pub comment: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Resource for ProductComment {
    const LABEL: &'static str = "product comment";
    const LABEL_PLURAL: &'static str = "product comments";
    const TITLE: &'static str = "Product comment";
    const ACK_FIELD: &'static str = "product_comment_id";

    fn id(&self) -> i64 {
        self.id
    }

    fn parent_id(&self) -> Option<i64> {
        Some(self.product_id)
    }

    fn table(store: &CatalogStore) -> &Table<Self> {
        &store.comments
    }

    async fn draft(store: &CatalogStore, payload: &JsonMap) -> Result<Draft<Self>, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let product_id = fields.i64("product_id");
        let user_id = fields.i64("user_id");
        let rating = fields.f64("rating");
        let comment = fields.string("comment");
        let parent_id = fields.nullable_i64("parent_id").flatten();

        if !fields.has_error("product_id") && !store.products.contains(product_id).await {
            fields.error("product_id", unresolved_fk(product_id));
        }
        if !fields.has_error("user_id") && !store.users.contains(user_id).await {
            fields.error("user_id", unresolved_fk(user_id));
        }
        fields.finish()?;

        Ok(Draft::new(move |id| Self {
            id,
            product_id,
            user_id,
            rating,
            comment,
            parent_id,
            created_at: Utc::now(),
        }))
    }

    async fn merge(&mut self, store: &CatalogStore, payload: &JsonMap) -> Result<(), ValidationErrors> {
        let mut fields = Fields::new(payload);
        if let Some(rating) = fields.opt_f64("rating") {
            self.rating = rating;
        }
        if let Some(comment) = fields.opt_string("comment") {
            self.comment = comment;
        }
        if let Some(parent_id) = fields.nullable_i64("parent_id") {
            self.parent_id = parent_id;
        }
        if let Some(product_id) = fields.opt_i64("product_id") {
            if store.products.contains(product_id).await {
                self.product_id = product_id;
            } else {
                fields.error("product_id", unresolved_fk(product_id));
            }
        }
        if let Some(user_id) = fields.opt_i64("user_id") {
            if store.users.contains(user_id).await {
                self.user_id = user_id;
            } else {
                fields.error("user_id", unresolved_fk(user_id));
            }
        }
        fields.finish()
    }
}
