//! Root application state.

use std::sync::Arc;

use cmap_catalog::CatalogCache;
use cmap_model::ColorScheme;
use cmap_persistence::StateStore;
use cmap_state::{FilterModel, PreferenceStore};

/// Everything the update loop mutates.
///
/// Each container is owned here and changed only through its own updaters.
#[derive(Debug)]
pub struct AppState {
    pub filters: FilterModel,
    pub preferences: PreferenceStore,
    pub catalogs: CatalogCache,
}

impl AppState {
    /// Restore persisted documents from `store`; catalogs start pending.
    pub fn load(store: Arc<dyn StateStore>, host: ColorScheme) -> Self {
        Self {
            filters: FilterModel::load(Arc::clone(&store)),
            preferences: PreferenceStore::load(store, host),
            catalogs: CatalogCache::new(),
        }
    }
}
