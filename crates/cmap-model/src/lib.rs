//! Shared types for Course Map.
//!
//! This crate holds the documents every other crate agrees on:
//!
//! - [`FilterState`] - the persisted search (courses, direction, facets)
//! - [`Preferences`] - the persisted UI toggles
//! - [`Facet`] - the selectable filter dimensions
//! - [`CodeSet`] - ordered, de-duplicated code lists used by every facet
//!
//! Nothing here performs I/O. Persistence lives in `cmap-persistence`,
//! mutation rules in `cmap-state`.

mod code_set;
mod direction;
mod facet;
mod filters;
mod preferences;

pub use code_set::CodeSet;
pub use direction::QueryDirection;
pub use facet::Facet;
pub use filters::FilterState;
pub use preferences::{ColorScheme, PreferenceFlag, Preferences, StoredPreferences};
