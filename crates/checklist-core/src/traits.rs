use std::future::Future;

use crate::error::AppError;
use crate::models::{Item, ItemChanges, NewItem};

/// Persists and retrieves checklist items.
///
/// Every call is one unit of work: it either fully applies or leaves the
/// store untouched.
pub trait ItemStore: Send + Sync + Clone + 'static {
    /// Insert a new item and return it with its assigned id.
    fn create(&self, item: &NewItem) -> impl Future<Output = Result<Item, AppError>> + Send;

    /// Up to `limit` items, ordered by ascending id.
    fn list(&self, limit: u32) -> impl Future<Output = Result<Vec<Item>, AppError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<Item>, AppError>> + Send;

    /// Apply `changes` to the item with `id`. Returns `None` if it does not exist.
    fn update(
        &self,
        id: i32,
        changes: &ItemChanges,
    ) -> impl Future<Output = Result<Option<Item>, AppError>> + Send;

    /// Remove the item with `id`. Returns whether a row was removed.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, AppError>> + Send;

    /// Check store connectivity.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
