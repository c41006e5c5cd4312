//! Category entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, JsonMap, Resource};
use crate::store::{CatalogStore, Table};
use crate::validate::{Fields, ValidationErrors};

/// A product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Resource for Category {
    const LABEL: &'static str = "category";
    const LABEL_PLURAL: &'static str = "categories";
    const TITLE: &'static str = "Category";
    const ACK_FIELD: &'static str = "category_id";

    fn id(&self) -> i64 {
        self.id
    }

    fn table(store: &CatalogStore) -> &Table<Self> {
        &store.categories
    }

    async fn draft(_store: &CatalogStore, payload: &JsonMap) -> Result<Draft<Self>, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let name = fields.string("name");
        let description = fields.nullable_string("description").flatten();
        fields.finish()?;

        Ok(Draft::new(move |id| Self {
            id,
            name,
            description,
            created_at: Utc::now(),
        }))
    }

    async fn merge(&mut self, _store: &CatalogStore, payload: &JsonMap) -> Result<(), ValidationErrors> {
        let mut fields = Fields::new(payload);
        if let Some(name) = fields.opt_string("name") {
            self.name = name;
        }
        if let Some(description) = fields.nullable_string("description") {
            self.description = description;
        }
        fields.finish()
    }

    /// A category with live products cannot be deleted
    async fn check_delete(&self, store: &CatalogStore) -> Result<(), String> {
        let id = self.id;
        if store.products.any(|p| p.category_id == id).await {
            Err("Category still has products!".to_string())
        } else {
            Ok(())
        }
    }
}
