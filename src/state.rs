//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::store::CatalogStore;

/// Shared application state, cheap to clone into every handler
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    store: Arc<CatalogStore>,
}

impl AppState {
    /// Create state with a fresh, empty store
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(CatalogStore::new()),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the entity store
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }
}
