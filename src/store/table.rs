//! Generic in-memory table

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use super::error::{StoreError, StoreOperation};

/// One entity table: rows keyed by a store-assigned id
///
/// Ids are assigned monotonically from 1 and never reused. All reads return
/// clones so callers never hold the lock across awaits.
pub struct Table<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E: Clone + Send + Sync> Table<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a new row, handing the assigned id to the row builder
    pub async fn insert(&self, build: impl FnOnce(i64) -> E) -> E {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = build(id);
        self.rows.write().await.insert(id, row.clone());
        row
    }

    /// Fetch a row by id
    pub async fn get(&self, id: i64) -> Option<E> {
        self.rows.read().await.get(&id).cloned()
    }

    /// Whether a row with this id exists
    pub async fn contains(&self, id: i64) -> bool {
        self.rows.read().await.contains_key(&id)
    }

    /// All rows in id order
    pub async fn all(&self) -> Vec<E> {
        self.rows.read().await.values().cloned().collect()
    }

    /// Rows matching a predicate, in id order
    pub async fn filter(&self, pred: impl Fn(&E) -> bool) -> Vec<E> {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    /// Whether any row matches the predicate
    pub async fn any(&self, pred: impl Fn(&E) -> bool) -> bool {
        self.rows.read().await.values().any(|row| pred(row))
    }

    /// Replace an existing row, keeping its id
    pub async fn replace(&self, id: i64, row: E) -> Result<E, StoreError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(row)
            }
            None => Err(StoreError::vanished(StoreOperation::Update, id)),
        }
    }

    /// Remove a row by id
    pub async fn remove(&self, id: i64) -> Result<(), StoreError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::vanished(StoreOperation::Delete, id)),
        }
    }

    /// Remove every row matching the predicate; returns how many went
    pub async fn remove_where(&self, pred: impl Fn(&E) -> bool) -> usize {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, row| !pred(row));
        before - rows.len()
    }

    /// Number of rows
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the table holds no rows
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<E: Clone + Send + Sync> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}
