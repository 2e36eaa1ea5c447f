//! Session-lifetime catalog cache.
//!
//! The two fetched catalogs start [`CatalogSlot::Pending`] and are filled at
//! most once. Compiled-in catalogs are always available. Nothing is ever
//! evicted or refreshed.

use cmap_model::Facet;

use crate::catalog::Catalog;
use crate::embedded::static_catalog;
use crate::entry::CatalogEntry;
use crate::error::CatalogError;

/// The catalogs that come from the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchedCatalog {
    Courses,
    Fields,
}

impl FetchedCatalog {
    pub const ALL: [FetchedCatalog; 2] = [Self::Courses, Self::Fields];

    /// Facet this catalog populates.
    pub const fn facet(&self) -> Facet {
        match self {
            Self::Courses => Facet::Courses,
            Self::Fields => Facet::Fields,
        }
    }

    pub fn from_facet(facet: Facet) -> Option<Self> {
        match facet {
            Facet::Courses => Some(Self::Courses),
            Facet::Fields => Some(Self::Fields),
            _ => None,
        }
    }
}

/// Load state of a fetched catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSlot {
    /// Request still outstanding.
    #[default]
    Pending,
    /// Catalog arrived.
    Ready(Catalog),
    /// Request failed; the catalog stays empty for the session. Holds the
    /// user-facing reason.
    Failed(String),
}

impl CatalogSlot {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Outcome of looking a selected code up in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The catalog knows this code.
    Resolved(&'a CatalogEntry),
    /// The catalog has not arrived yet.
    Pending,
    /// The catalog is available (or has failed) and does not list this code.
    Unknown,
}

impl<'a> Resolution<'a> {
    pub fn entry(&self) -> Option<&'a CatalogEntry> {
        match self {
            Self::Resolved(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Every catalog a facet control can draw from.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    courses: CatalogSlot,
    fields: CatalogSlot,
}

impl CatalogCache {
    /// A cache with both fetched catalogs pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a fetch.
    ///
    /// Returns `false` and leaves the slot alone when it was already filled;
    /// each catalog is fetched once per session.
    pub fn fill(
        &mut self,
        which: FetchedCatalog,
        result: std::result::Result<Catalog, CatalogError>,
    ) -> bool {
        let slot = self.slot_mut(which);
        if !slot.is_pending() {
            tracing::debug!(?which, "Ignoring late catalog completion");
            return false;
        }

        *slot = match result {
            Ok(catalog) => {
                tracing::info!(?which, entries = catalog.len(), "Catalog loaded");
                CatalogSlot::Ready(catalog)
            }
            Err(error) => {
                tracing::warn!(?which, %error, "Catalog fetch failed; showing no options");
                CatalogSlot::Failed(error.user_message().to_string())
            }
        };
        true
    }

    pub fn slot(&self, which: FetchedCatalog) -> &CatalogSlot {
        match which {
            FetchedCatalog::Courses => &self.courses,
            FetchedCatalog::Fields => &self.fields,
        }
    }

    fn slot_mut(&mut self, which: FetchedCatalog) -> &mut CatalogSlot {
        match which {
            FetchedCatalog::Courses => &mut self.courses,
            FetchedCatalog::Fields => &mut self.fields,
        }
    }

    /// Catalog for `facet` when one is available.
    pub fn catalog(&self, facet: Facet) -> Option<&Catalog> {
        match FetchedCatalog::from_facet(facet) {
            Some(which) => self.slot(which).catalog(),
            None => static_catalog(facet),
        }
    }

    /// Whether `facet` is still waiting on its fetch.
    pub fn is_loading(&self, facet: Facet) -> bool {
        FetchedCatalog::from_facet(facet).is_some_and(|which| self.slot(which).is_pending())
    }

    /// Options for `facet` in display order; empty while pending or after a failure.
    pub fn options(&self, facet: Facet) -> &[CatalogEntry] {
        self.catalog(facet).map(Catalog::entries).unwrap_or_default()
    }

    /// Options for `facet` matching the picker's search input.
    pub fn search(&self, facet: Facet, input: &str) -> Vec<&CatalogEntry> {
        self.catalog(facet)
            .map(|catalog| catalog.search(input).collect())
            .unwrap_or_default()
    }

    /// Look up a selected code.
    pub fn resolve(&self, facet: Facet, code: &str) -> Resolution<'_> {
        if self.is_loading(facet) {
            return Resolution::Pending;
        }
        match self.catalog(facet).and_then(|catalog| catalog.get(code)) {
            Some(entry) => Resolution::Resolved(entry),
            None => Resolution::Unknown,
        }
    }

    /// Display label for a selected code, falling back to the raw code.
    pub fn label(&self, facet: Facet, code: &str) -> String {
        self.resolve(facet, code)
            .entry()
            .map_or_else(|| code.to_string(), |entry| entry.name.clone())
    }
}
