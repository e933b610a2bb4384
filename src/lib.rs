//! Bucket List core - domain logic for a local checklist app.
//!
//! A thin, embeddable core behind a single-screen list UI: a SQLite-backed
//! item store plus the list view model the screen drives. No UI and no
//! network live here; the host shell owns rendering and dialogs and talks
//! to the crate through the types in [`interface`].

pub mod controller;
pub mod database;
pub mod interface;
mod store;

pub use controller::ListController;
pub use interface::*;
pub use store::TodoStore;
