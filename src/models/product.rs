//! Product entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, JsonMap, Resource};
use crate::store::{CatalogStore, Table};
use crate::validate::{unresolved_fk, Fields, ValidationErrors};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub discount: f64,
    pub amount: i64,
    pub is_public: bool,
    pub thumbnail: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Resource for Product {
    const LABEL: &'static str = "product";
    const LABEL_PLURAL: &'static str = "products";
    const TITLE: &'static str = "Product";
    const ACK_FIELD: &'static str = "product_id";

    fn id(&self) -> i64 {
        self.id
    }

    fn table(store: &CatalogStore) -> &Table<Self> {
        &store.products
    }

    async fn draft(store: &CatalogStore, payload: &JsonMap) -> Result<Draft<Self>, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let name = fields.string("name");
        let unit = fields.string("unit");
        let price = fields.f64("price");
        let discount = fields.f64("discount");
        let amount = fields.i64("amount");
        let is_public = fields.bool("is_public");
        let thumbnail = fields.string("thumbnail");
        let category_id = fields.i64("category_id");

        // Resolve the category before any record exists
        if !fields.has_error("category_id") && !store.categories.contains(category_id).await {
            fields.error("category_id", unresolved_fk(category_id));
        }
        fields.finish()?;

        Ok(Draft::new(move |id| Self {
            id,
            name,
            unit,
            price,
            discount,
            amount,
            is_public,
            thumbnail,
            category_id,
            created_at: Utc::now(),
        }))
    }

    async fn merge(&mut self, store: &CatalogStore, payload: &JsonMap) -> Result<(), ValidationErrors> {
        let mut fields = Fields::new(payload);
        if let Some(name) = fields.opt_string("name") {
            self.name = name;
        }
        if let Some(unit) = fields.opt_string("unit") {
            self.unit = unit;
        }
        if let Some(price) = fields.opt_f64("price") {
            self.price = price;
        }
        if let Some(discount) = fields.opt_f64("discount") {
            self.discount = discount;
        }
        if let Some(amount) = fields.opt_i64("amount") {
            self.amount = amount;
        }
        if let Some(is_public) = fields.opt_bool("is_public") {
            self.is_public = is_public;
        }
        if let Some(thumbnail) = fields.opt_string("thumbnail") {
            self.thumbnail = thumbnail;
        }
        if let Some(category_id) = fields.opt_i64("category_id") {
            if store.categories.contains(category_id).await {
                self.category_id = category_id;
            } else {
                fields.error("category_id", unresolved_fk(category_id));
            }
        }
        fields.finish()
    }

    /// Images and comments are owned sub-resources; they go with the product
    async fn cascade_delete(&self, store: &CatalogStore) {
        let id = self.id;
        let images = store.images.remove_where(|i| i.product_id == id).await;
        let comments = store.comments.remove_where(|c| c.product_id == id).await;
        if images + comments > 0 {
            tracing::debug!(product_id = id, images, comments, "cascaded product delete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> JsonMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    async fn store_with_category() -> (CatalogStore, i64) {
        let store = CatalogStore::new();
        let category = store
            .categories
            .insert(|id| Category {
                id,
                name: "Drinks".into(),
                description: None,
                created_at: Utc::now(),
            })
            .await;
        let id = category.id;
        (store, id)
    }

    #[tokio::test]
    async fn test_draft_resolves_category() {
        let (store, category_id) = store_with_category().await;
        let body = payload(json!({
            "name": "Cola",
            "unit": "bottle",
            "price": 2.5,
            "discount": 0.0,
            "amount": 10,
            "is_public": true,
            "thumbnail": "cola.png",
            "category_id": category_id
        }));

        let product = Product::draft(&store, &body).await.unwrap().build(1);
        assert_eq!(product.category_id, category_id);
        assert_eq!(product.price, 2.5);
    }

    #[tokio::test]
    async fn test_draft_rejects_unknown_category() {
        let store = CatalogStore::new();
        let body = payload(json!({
            "name": "Cola",
            "unit": "bottle",
            "price": 2.5,
            "discount": 0.0,
            "amount": 10,
            "is_public": true,
            "thumbnail": "cola.png",
            "category_id": 99
        }));

        let errors = Product::draft(&store, &body).await.unwrap_err();
        assert_eq!(errors["category_id"], "Invalid pk \"99\" - object does not exist.");
    }

    #[tokio::test]
    async fn test_draft_reports_every_missing_field() {
        let store = CatalogStore::new();
        let body = payload(json!({"name": "Cola"}));

        let errors = Product::draft(&store, &body).await.unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors["unit"], "This field is required.");
        assert_eq!(errors["category_id"], "This field is required.");
    }

    #[tokio::test]
    async fn test_merge_rechecks_category() {
        let (store, category_id) = store_with_category().await;
        let mut product = Product {
            id: 1,
            name: "Cola".into(),
            unit: "bottle".into(),
            price: 2.5,
            discount: 0.0,
            amount: 10,
            is_public: true,
            thumbnail: "cola.png".into(),
            category_id,
            created_at: Utc::now(),
        };

        let body = payload(json!({"category_id": 42}));
        let errors = product.merge(&store, &body).await.unwrap_err();
        assert_eq!(errors["category_id"], "Invalid pk \"42\" - object does not exist.");
    }

    #[tokio::test]
    async fn test_merge_partial_update() {
        let (store, category_id) = store_with_category().await;
        let mut product = Product {
            id: 1,
            name: "Cola".into(),
            unit: "bottle".into(),
            price: 2.5,
            discount: 0.0,
            amount: 10,
            is_public: true,
            thumbnail: "cola.png".into(),
            category_id,
            created_at: Utc::now(),
        };

        let created_at = product.created_at;
        let body = payload(json!({"price": 3.0, "amount": 7}));
        product.merge(&store, &body).await.unwrap();
        assert_eq!(product.price, 3.0);
        assert_eq!(product.amount, 7);
        assert_eq!(product.name, "Cola");
        assert!(product.is_public);
        assert_eq!(product.created_at, created_at);
    }
}
