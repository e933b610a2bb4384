//! Public surface of the Bucket List core.
//!
//! The embedding shell talks to the crate exclusively through these types:
//! the `TodoItem` record, the `BucketListError` error, and the `ItemStore`
//! trait the controller receives as its injected store handle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Assigned by the store as high-water-mark + 1. Unique for the
    /// store's lifetime, not contiguous after deletions.
    pub id: i64,
    pub text: String,
    pub is_completed: bool,
}

/// Error type for Bucket List operations
#[derive(Debug, Error)]
pub enum BucketListError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("No item with id {0}")]
    ItemNotFound(i64),
}

pub type BucketListResult<T> = Result<T, BucketListError>;

/// The store handle injected into the list controller.
///
/// `TodoStore` is the production implementation; tests substitute their
/// own to exercise the controller's failure handling.
pub trait ItemStore: Send + Sync {
    /// Create a new, uncompleted item. The assigned id is strictly greater
    /// than every id this store has handed out or observed so far.
    fn create(&self, text: &str) -> BucketListResult<TodoItem>;

    /// All persisted items, in store order (no sort is guaranteed).
    fn list_all(&self) -> BucketListResult<Vec<TodoItem>>;

    /// Overwrite the text of an existing item.
    fn set_text(&self, id: i64, text: &str) -> BucketListResult<()>;

    /// Overwrite the completion flag of an existing item.
    fn set_completed(&self, id: i64, completed: bool) -> BucketListResult<()>;

    /// Remove an item. The caller owns any in-memory mirror of the list.
    fn delete(&self, item: &TodoItem) -> BucketListResult<()>;

    /// Remove the item with the given id; a no-op when no row matches.
    fn delete_by_id(&self, id: i64) -> BucketListResult<()>;
}

impl From<crate::database::DatabaseError> for BucketListError {
    fn from(e: crate::database::DatabaseError) -> Self {
        BucketListError::DatabaseError(e.to_string())
    }
}
