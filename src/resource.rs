//! The per-entity schema seam
//!
//! [`Resource`] is everything the generic CRUD pipeline needs to know about
//! one entity: its wire labels, its table in the store, how to build a new
//! record from an untyped payload, how to merge an update, and what deleting
//! it means for related records. The handlers in `handlers::crud` are written
//! once against this trait; each entity supplies one impl.

use std::future::Future;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::store::{CatalogStore, Table};
use crate::validate::ValidationErrors;

/// Decoded JSON object payload
pub type JsonMap = Map<String, Value>;

/// A validated record waiting for its store-assigned id
///
/// Validation happens before the id exists, so the draft closes over the
/// validated fields and builds the record once the store hands out an id.
pub struct Draft<E> {
    build: Box<dyn FnOnce(i64) -> E + Send>,
}

impl<E> std::fmt::Debug for Draft<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draft").finish_non_exhaustive()
    }
}

impl<E> Draft<E> {
    pub fn new(build: impl FnOnce(i64) -> E + Send + 'static) -> Self {
        Self {
            build: Box::new(build),
        }
    }

    pub fn build(self, id: i64) -> E {
        (self.build)(id)
    }
}

/// An entity the generic CRUD operations can be instantiated over
pub trait Resource: Clone + Serialize + Send + Sync + Sized + 'static {
    /// Lowercase label used in operation messages ("product image")
    const LABEL: &'static str;

    /// Plural label for list messages ("product images")
    const LABEL_PLURAL: &'static str;

    /// Capitalized label for not-found messages ("Product image")
    const TITLE: &'static str;

    /// Key of the delete acknowledgment body ("product_image_id")
    const ACK_FIELD: &'static str;

    /// Store-assigned primary key
    fn id(&self) -> i64;

    /// Owning ancestor id for scoped routes; `None` for top-level entities
    fn parent_id(&self) -> Option<i64> {
        None
    }

    /// This entity's table in the store
    fn table(store: &CatalogStore) -> &Table<Self>;

    /// Validate a create payload into a draft record
    ///
    /// Required foreign keys are resolved against the store here, before any
    /// record is constructed; a miss is a field-level validation error.
    fn draft(
        store: &CatalogStore,
        payload: &JsonMap,
    ) -> impl Future<Output = Result<Draft<Self>, ValidationErrors>> + Send;

    /// Merge an update payload onto this record
    ///
    /// Fields absent from the payload keep their prior values. The record is
    /// a detached copy; the caller persists it only if the merge succeeds.
    fn merge(
        &mut self,
        store: &CatalogStore,
        payload: &JsonMap,
    ) -> impl Future<Output = Result<(), ValidationErrors>> + Send;

    /// Referential integrity gate before deletion
    ///
    /// An `Err` carries the message reported to the client.
    fn check_delete(&self, store: &CatalogStore) -> impl Future<Output = Result<(), String>> + Send {
        let _ = store;
        async { Ok::<(), String>(()) }
    }

    /// Remove owned records after this one was deleted
    fn cascade_delete(&self, store: &CatalogStore) -> impl Future<Output = ()> + Send {
        let _ = store;
        async {}
    }
}
