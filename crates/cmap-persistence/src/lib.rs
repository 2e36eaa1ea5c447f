//! Persistent state documents for Course Map.
//!
//! Two JSON documents survive between sessions: the search (`filters`) and
//! the UI toggles (`preferences`). This crate stores and restores them.
//!
//! # Guarantees
//!
//! - **Loading never fails.** A missing, unreadable or structurally
//!   mismatched document yields the caller's default, untouched.
//! - **Saving never interrupts.** [`save`] logs and swallows failures such
//!   as an exhausted quota; [`try_save`] is there for callers that care.
//! - **Atomic writes** for the file store (temp file + rename).
//!
//! # Example
//!
//! ```ignore
//! use cmap_persistence::{FILTERS_KEY, FileStore, load, save};
//!
//! let store = FileStore::new("/tmp/course-map");
//! let filters = load(&store, FILTERS_KEY, FilterState::default());
//! save(&store, FILTERS_KEY, &filters);
//! ```
//!
//! # Architecture
//!
//! - `store/` - the [`StateStore`] trait and its file/memory backends
//! - `document.rs` - typed load/save on top of any store
//! - `error.rs` - error types with user-friendly messages

mod document;
mod error;
mod store;

pub use document::{load, save, try_load, try_save};
pub use error::{PersistenceError, Result};
pub use store::{FileStore, MemoryStore, StateStore};

/// Storage key of the search document.
pub const FILTERS_KEY: &str = "filters";

/// Storage key of the preferences document.
pub const PREFERENCES_KEY: &str = "preferences";
