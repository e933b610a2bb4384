//! TodoStore - the persistent item store behind the list screen.

use crate::database::Database;
use crate::interface::{BucketListError, BucketListResult, ItemStore, TodoItem};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

/// SQLite-backed checklist store with high-water-mark id assignment.
///
/// The mark starts at the largest id already on disk (-1 for a fresh
/// database) and only ever rises while the store lives: `create` advances
/// it after the insert persisted, so a failed create never burns an id,
/// and `list_all` raises it over anything it observes. Deleting the
/// highest item does not lower the mark, which is what keeps ids from
/// being reused within the store's lifetime.
pub struct TodoStore {
    db: Arc<Database>,
    highest_id: Mutex<i64>,
}

impl TodoStore {
    /// Open or create a store backed by the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> BucketListResult<Self> {
        let db = Database::open(path)?;
        Self::with_database(Arc::new(db))
    }

    /// Store backed by an in-memory database (for testing).
    pub fn open_in_memory() -> BucketListResult<Self> {
        let db = Database::open_in_memory()?;
        Self::with_database(Arc::new(db))
    }

    fn with_database(db: Arc<Database>) -> BucketListResult<Self> {
        // Seed the mark from disk so a create before the first list_all
        // cannot collide with rows persisted by an earlier run.
        let highest_id = db.max_id()?.unwrap_or(-1);
        Ok(Self {
            db,
            highest_id: Mutex::new(highest_id),
        })
    }
}

impl ItemStore for TodoStore {
    fn create(&self, text: &str) -> BucketListResult<TodoItem> {
        let mut highest = self.highest_id.lock();
        let id = *highest + 1;
        self.db.insert_item(id, text, false)?;
        *highest = id;
        Ok(TodoItem {
            id,
            text: text.to_string(),
            is_completed: false,
        })
    }

    fn list_all(&self) -> BucketListResult<Vec<TodoItem>> {
        let items = self.db.fetch_all_items()?;
        // Raise (never lower) the mark over every id observed
        let mut highest = self.highest_id.lock();
        for item in &items {
            if item.id > *highest {
                *highest = item.id;
            }
        }
        Ok(items)
    }

    fn set_text(&self, id: i64, text: &str) -> BucketListResult<()> {
        match self.db.update_text(id, text)? {
            0 => Err(BucketListError::ItemNotFound(id)),
            _ => Ok(()),
        }
    }

    fn set_completed(&self, id: i64, completed: bool) -> BucketListResult<()> {
        match self.db.update_completed(id, completed)? {
            0 => Err(BucketListError::ItemNotFound(id)),
            _ => Ok(()),
        }
    }

    fn delete(&self, item: &TodoItem) -> BucketListResult<()> {
        self.delete_by_id(item.id)
    }

    fn delete_by_id(&self, id: i64) -> BucketListResult<()> {
        // Zero matched rows is a no-op, not an error
        self.db.delete_item(id)?;
        Ok(())
    }
}
