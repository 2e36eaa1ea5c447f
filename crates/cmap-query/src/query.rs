//! Enriched query built from filter state and catalogs.

use cmap_catalog::{CatalogCache, Resolution};
use cmap_model::{CodeSet, Facet, FilterState, QueryDirection};

use crate::contract::QueryContract;

/// How a selected code matched its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Resolved,
    /// Catalog still loading.
    Pending,
    /// Catalog does not list the code.
    Unknown,
}

/// A selected code with whatever display data its catalog provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub code: String,
    /// Catalog name, or the code itself when unresolved.
    pub label: String,
    pub group: Option<String>,
    /// Season badge; empty when the entry lists no semesters.
    pub badge: String,
    pub status: ItemStatus,
}

impl QueryItem {
    fn unresolved(code: &str, status: ItemStatus) -> Self {
        Self {
            code: code.to_string(),
            label: code.to_string(),
            group: None,
            badge: String::new(),
            status,
        }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.status == ItemStatus::Resolved
    }
}

/// The graph query, shaped like [`FilterState`] with each code enriched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub courses: Vec<QueryItem>,
    pub direction: QueryDirection,
    pub fields: Vec<QueryItem>,
    pub campus: Vec<QueryItem>,
    pub year: Vec<QueryItem>,
    pub semesters: Vec<QueryItem>,
    pub breadth: Vec<QueryItem>,
}

impl Query {
    /// Items for a multi-select facet. `None` for [`Facet::Type`].
    pub fn items(&self, facet: Facet) -> Option<&[QueryItem]> {
        match facet {
            Facet::Courses => Some(&self.courses),
            Facet::Type => None,
            Facet::Fields => Some(&self.fields),
            Facet::Campus => Some(&self.campus),
            Facet::Year => Some(&self.year),
            Facet::Semesters => Some(&self.semesters),
            Facet::Breadth => Some(&self.breadth),
        }
    }

    /// The codes-only document handed to the renderer.
    pub fn contract(&self) -> QueryContract {
        fn codes(items: &[QueryItem]) -> Vec<String> {
            items.iter().map(|item| item.code.clone()).collect()
        }

        QueryContract {
            courses: codes(&self.courses),
            direction: self.direction,
            fields: codes(&self.fields),
            campus: codes(&self.campus),
            year: codes(&self.year),
            semesters: codes(&self.semesters),
            breadth: codes(&self.breadth),
        }
    }
}

/// Build the query for `state`, resolving codes against `catalogs`.
///
/// Codes are never dropped: anything the catalogs cannot resolve comes back
/// with its raw code as label.
pub fn build_query(state: &FilterState, catalogs: &CatalogCache) -> Query {
    let items = |facet: Facet, codes: &CodeSet| -> Vec<QueryItem> {
        codes.iter().map(|code| resolve(catalogs, facet, code)).collect()
    };

    Query {
        courses: items(Facet::Courses, &state.courses),
        direction: state.direction,
        fields: items(Facet::Fields, &state.fields),
        campus: items(Facet::Campus, &state.campus),
        year: items(Facet::Year, &state.year),
        semesters: items(Facet::Semesters, &state.semesters),
        breadth: items(Facet::Breadth, &state.breadth),
    }
}

fn resolve(catalogs: &CatalogCache, facet: Facet, code: &str) -> QueryItem {
    match catalogs.resolve(facet, code) {
        Resolution::Resolved(entry) => QueryItem {
            code: code.to_string(),
            label: entry.name.clone(),
            group: entry.group.clone(),
            badge: entry.season_badge(),
            status: ItemStatus::Resolved,
        },
        Resolution::Pending => QueryItem::unresolved(code, ItemStatus::Pending),
        Resolution::Unknown => QueryItem::unresolved(code, ItemStatus::Unknown),
    }
}
