//! Product image entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, JsonMap, Resource};
use crate::store::{CatalogStore, Table};
use crate::validate::{unresolved_fk, Fields, ValidationErrors};

/// An image attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for ProductImage {
    const LABEL: &'static str = "product image";
    const LABEL_PLURAL: &'static str = "product images";
    const TITLE: &'static str = "Product image";
    const ACK_FIELD: &'static str = "product_image_id";

    fn id(&self) -> i64 {
        self.id
    }

    fn parent_id(&self) -> Option<i64> {
        Some(self.product_id)
    }

    fn table(store: &CatalogStore) -> &Table<Self> {
        &store.images
    }

    async fn draft(store: &CatalogStore, payload: &JsonMap) -> Result<Draft<Self>, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let product_id = fields.i64("product_id");
        let image_url = fields.string("image_url");

        if !fields.has_error("product_id") && !store.products.contains(product_id).await {
            fields.error("product_id", unresolved_fk(product_id));
        }
        fields.finish()?;

        Ok(Draft::new(move |id| Self {
            id,
            product_id,
            image_url,
            created_at: Utc::now(),
        }))
    }

    async fn merge(&mut self, store: &CatalogStore, payload: &JsonMap) -> Result<(), ValidationErrors> {
        let mut fields = Fields::new(payload);
        if let Some(image_url) = fields.opt_string("image_url") {
            self.image_url = image_url;
        }
        if let Some(product_id) = fields.opt_i64("product_id") {
            if store.products.contains(product_id).await {
                self.product_id = product_id;
            } else {
                fields.error("product_id", unresolved_fk(product_id));
            }
        }
        fields.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> JsonMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_draft_requires_existing_product() {
        let store = CatalogStore::new();
        let body = payload(json!({"product_id": 3, "image_url": "a.png"}));

        let errors = ProductImage::draft(&store, &body).await.unwrap_err();
        assert_eq!(errors["product_id"], "Invalid pk \"3\" - object does not exist.");
    }

    #[tokio::test]
    async fn test_parent_is_the_product() {
        let image = ProductImage {
            id: 1,
            product_id: 7,
            image_url: "a.png".into(),
            created_at: Utc::now(),
        };
        assert_eq!(image.parent_id(), Some(7));
    }
}
