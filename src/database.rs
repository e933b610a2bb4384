//! SQLite persistence layer for checklist items.
//!
//! Single `items` table, application-assigned ids. Uses r2d2 connection
//! pooling so the store can be shared behind `&self` without a connection
//! mutex.

use crate::interface::TodoItem;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Thread-safe database wrapper using connection pooling.
///
/// WAL mode lets readers proceed without blocking each other; writes are
/// serialized by SQLite itself (single local writer, per the app's model).
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> DatabaseResult<Self> {
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch(
                "
                PRAGMA journal_mode=WAL;
                PRAGMA synchronous=NORMAL;
                PRAGMA foreign_keys=ON;
            ",
            )?;
            Ok(())
        });

        let pool = Pool::builder().max_size(4).build(manager)?;

        let db = Self { pool };
        db.setup_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> DatabaseResult<Self> {
        let manager = SqliteConnectionManager::memory().with_init(|conn| {
            conn.execute_batch(
                "
                PRAGMA journal_mode=WAL;
                PRAGMA synchronous=NORMAL;
                PRAGMA foreign_keys=ON;
            ",
            )?;
            Ok(())
        });

        // In-memory needs a single connection to maintain state
        let pool = Pool::builder().max_size(1).build(manager)?;

        let db = Self { pool };
        db.setup_schema()?;
        Ok(db)
    }

    /// Get a connection from the pool
    fn get_conn(&self) -> DatabaseResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Set up the schema. `id` is application-assigned (the store owns id
    /// generation); the database only enforces uniqueness.
    fn setup_schema(&self) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY,
                text TEXT NOT NULL,
                isCompleted INTEGER NOT NULL DEFAULT 0
            );
        "#,
        )?;
        Ok(())
    }

    /// Insert a new item row.
    pub fn insert_item(&self, id: i64, text: &str, is_completed: bool) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO items (id, text, isCompleted) VALUES (?1, ?2, ?3)",
            params![id, text, is_completed],
        )?;
        Ok(())
    }

    /// Fetch all items in store order (no ORDER BY; callers must not rely
    /// on any particular ordering).
    pub fn fetch_all_items(&self) -> DatabaseResult<Vec<TodoItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, text, isCompleted FROM items")?;
        let items = stmt
            .query_map([], Self::row_to_item)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Largest id currently on disk, or None for an empty table.
    pub fn max_id(&self) -> DatabaseResult<Option<i64>> {
        let conn = self.get_conn()?;
        let max: Option<i64> = conn.query_row("SELECT MAX(id) FROM items", [], |row| row.get(0))?;
        Ok(max)
    }

    /// Overwrite the text of one item. Returns the affected row count.
    pub fn update_text(&self, id: i64, text: &str) -> DatabaseResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE items SET text = ?1 WHERE id = ?2",
            params![text, id],
        )?;
        Ok(affected)
    }

    /// Overwrite the completion flag of one item. Returns the affected row count.
    pub fn update_completed(&self, id: i64, completed: bool) -> DatabaseResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE items SET isCompleted = ?1 WHERE id = ?2",
            params![completed, id],
        )?;
        Ok(affected)
    }

    /// Delete an item by id. Returns the affected row count (0 when no row
    /// matched).
    pub fn delete_item(&self, id: i64) -> DatabaseResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM items WHERE id = ?1", [id])?;
        Ok(affected)
    }

    /// Total number of items.
    pub fn count_items(&self) -> DatabaseResult<u64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<TodoItem> {
        Ok(TodoItem {
            id: row.get(0)?,
            text: row.get(1)?,
            is_completed: row.get(2)?,
        })
    }
}
