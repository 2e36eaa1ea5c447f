//! Option catalogs for Course Map facets.
//!
//! Every facet control draws its options from a catalog:
//!
//! | Facet | Source |
//! |-------|--------|
//! | courses | fetched once per session (`/search`) |
//! | fields | fetched once per session (`/fields`), grouped by department |
//! | campus, year, semesters, breadth | compiled in |
//! | type | compiled in (the two query directions) |
//!
//! Selections never depend on catalog membership. A code picked before
//! its catalog arrives stays selected and is resolved lazily through
//! [`CatalogCache::resolve`].

mod cache;
mod catalog;
mod client;
mod embedded;
mod entry;
mod error;
mod highlight;
mod wire;

pub use cache::{CatalogCache, CatalogSlot, FetchedCatalog, Resolution};
pub use catalog::Catalog;
pub use client::{CatalogClient, CatalogSource, Endpoints, parse_courses, parse_fields};
pub use embedded::static_catalog;
pub use entry::{CatalogEntry, season_badge};
pub use error::{CatalogError, Result};
pub use highlight::{Segment, highlight};
pub use wire::{CourseRecord, Department, FieldAssociation, course_catalog, group_fields};

use cmap_model::Facet;

/// Message a picker shows when its catalog has nothing to offer.
pub fn no_options_message(facet: Facet) -> &'static str {
    match facet {
        Facet::Courses => "No Courses Found",
        Facet::Type => "No Search Types",
        Facet::Fields => "No Fields Found",
        Facet::Campus => "No Campuses Found",
        Facet::Year => "No Years Found",
        Facet::Semesters => "No Semesters Found",
        Facet::Breadth => "No Breadth Requirements Found",
    }
}
