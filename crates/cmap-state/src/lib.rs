//! Owned, injectable state containers for Course Map.
//!
//! - [`FilterModel`] owns the [`FilterState`](cmap_model::FilterState) and is
//!   the only place that knows how each facet's selection payload is shaped.
//! - [`PreferenceStore`] owns the [`Preferences`](cmap_model::Preferences).
//!
//! Both take a [`StateStore`](cmap_persistence::StateStore) at construction,
//! restore their document from it, and write the whole document back exactly
//! once per effective mutation. No-op events do not write.

mod facets;
mod filters;
mod outcome;
mod preferences;

pub use facets::{Arity, FACET_TABLE, FacetSpec, FacetUpdate, NormalizeError, SelectionKey, spec};
pub use filters::FilterModel;
pub use outcome::{ChangeOutcome, IgnoreReason};
pub use preferences::PreferenceStore;
