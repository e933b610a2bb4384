//! ListController - the view model behind the single list screen.
//!
//! Mirrors the store's contents in an ordered Vec the way the screen keeps
//! its local row array: reloaded wholesale at startup and after every add,
//! spliced in place after a delete, flipped in place on a checkbox toggle.
//! Persistence failures stop here: they are logged to the diagnostic
//! stream and otherwise swallowed, never surfaced to the caller as errors.

use crate::interface::{ItemStore, TodoItem};
use std::sync::Arc;
use tracing::{error, warn};

pub struct ListController {
    store: Arc<dyn ItemStore>,
    items: Vec<TodoItem>,
}

impl ListController {
    /// Build a controller over an injected store handle and load the
    /// current list. A load failure leaves the mirror empty.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        let mut controller = Self {
            store,
            items: Vec::new(),
        };
        controller.refresh();
        controller
    }

    /// The rows currently mirrored, in store order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wholesale reload from the store. The mirror is cleared before the
    /// fetch, so a read failure leaves it empty rather than stale.
    pub fn refresh(&mut self) {
        self.items.clear();
        match self.store.list_all() {
            Ok(items) => self.items = items,
            Err(e) => error!("could not load items: {e}"),
        }
    }

    /// Create a new item, then reload the whole list from the store rather
    /// than appending in place. On failure the mirror is untouched.
    pub fn add(&mut self, text: &str) {
        match self.store.create(text) {
            Ok(_) => self.refresh(),
            Err(e) => error!("could not save new item: {e}"),
        }
    }

    /// Flip the completion flag of the row, returning the new flag for the
    /// checkbox to mirror directly (no reload). The cached flip is kept
    /// even when the write fails, so mirror and store may disagree until
    /// the next reload.
    pub fn toggle_completed(&mut self, row: usize) -> Option<bool> {
        let item = match self.items.get_mut(row) {
            Some(item) => item,
            None => {
                warn!(row, "toggle on out-of-range row");
                return None;
            }
        };
        item.is_completed = !item.is_completed;
        let (id, completed) = (item.id, item.is_completed);
        if let Err(e) = self.store.set_completed(id, completed) {
            error!(id, "could not save completion flag: {e}");
        }
        Some(completed)
    }

    /// Replace the text of the row. The mirror is only updated once the
    /// store accepted the new text; returns whether the edit stuck.
    pub fn set_text(&mut self, row: usize, text: &str) -> bool {
        let item = match self.items.get_mut(row) {
            Some(item) => item,
            None => {
                warn!(row, "edit on out-of-range row");
                return false;
            }
        };
        match self.store.set_text(item.id, text) {
            Ok(()) => {
                item.text = text.to_string();
                true
            }
            Err(e) => {
                error!(id = item.id, "could not save edited text: {e}");
                false
            }
        }
    }

    /// Delete the row. It is spliced out of the mirror by position only
    /// when the store delete succeeded; on failure the mirror is left
    /// untouched.
    pub fn delete(&mut self, row: usize) -> bool {
        let item = match self.items.get(row) {
            Some(item) => item,
            None => {
                warn!(row, "delete on out-of-range row");
                return false;
            }
        };
        match self.store.delete(item) {
            Ok(()) => {
                self.items.remove(row);
                true
            }
            Err(e) => {
                error!(id = item.id, "could not delete item: {e}");
                false
            }
        }
    }
}
