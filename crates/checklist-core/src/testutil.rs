//! Test utilities: an in-memory [`ItemStore`].
//!
//! Uses `Arc<Mutex<_>>` so clones share state, the same way a pooled
//! repository shares its database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{Item, ItemChanges, NewItem};
use crate::traits::ItemStore;

#[derive(Default)]
struct Inner {
    last_id: i32,
    items: BTreeMap<i32, Item>,
}

/// In-memory item store with `SERIAL`-like id assignment (ids start at 1
/// and are never reused).
#[derive(Clone, Default)]
pub struct MockItemStore {
    inner: Arc<Mutex<Inner>>,
    unavailable: bool,
}

impl MockItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the pool could not hand out a
    /// connection.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable {
            Err(AppError::ServiceUnavailable("pool timed out".into()))
        } else {
            Ok(())
        }
    }
}

impl ItemStore for MockItemStore {
    async fn create(&self, item: &NewItem) -> Result<Item, AppError> {
        self.check_available()?;
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let created = Item {
            id: inner.last_id,
            text: item.text.clone(),
            is_done: item.is_done,
        };
        inner.items.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list(&self, limit: u32) -> Result<Vec<Item>, AppError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .items
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, AppError> {
        self.check_available()?;
        Ok(self.inner.lock().unwrap().items.get(&id).cloned())
    }

    async fn update(&self, id: i32, changes: &ItemChanges) -> Result<Option<Item>, AppError> {
        self.check_available()?;
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.items.get_mut(&id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self.inner.lock().unwrap().items.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_available()
    }
}
