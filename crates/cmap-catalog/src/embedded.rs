//! Compiled-in catalogs.
//!
//! Campus, year, semester and breadth options are embedded at compile time
//! with `include_str!()` and parsed once on first use. The query direction
//! picker is built from [`QueryDirection::ALL`].

use std::collections::HashMap;
use std::sync::LazyLock;

use cmap_model::{Facet, QueryDirection};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;

/// Static catalogs source document.
const STATIC_CATALOGS: &str = include_str!("../data/static_catalogs.json");

#[derive(Deserialize)]
struct StaticCatalogs {
    campus: Vec<CatalogEntry>,
    year: Vec<CatalogEntry>,
    semesters: Vec<CatalogEntry>,
    breadth: Vec<CatalogEntry>,
}

static CATALOGS: LazyLock<HashMap<Facet, Catalog>> = LazyLock::new(|| {
    let mut catalogs = HashMap::new();
    catalogs.insert(
        Facet::Type,
        QueryDirection::ALL
            .iter()
            .map(|d| CatalogEntry::new(d.as_str(), d.label()))
            .collect(),
    );

    match serde_json::from_str::<StaticCatalogs>(STATIC_CATALOGS) {
        Ok(data) => {
            catalogs.insert(Facet::Campus, Catalog::from_entries(data.campus));
            catalogs.insert(Facet::Year, Catalog::from_entries(data.year));
            catalogs.insert(Facet::Semesters, Catalog::from_entries(data.semesters));
            catalogs.insert(Facet::Breadth, Catalog::from_entries(data.breadth));
        }
        Err(error) => {
            tracing::error!(%error, "Embedded static catalogs are malformed");
        }
    }
    catalogs
});

/// Compiled-in catalog for `facet`. `None` for fetched facets.
pub fn static_catalog(facet: Facet) -> Option<&'static Catalog> {
    CATALOGS.get(&facet)
}
