//! Message hierarchy for the application loop.
//!
//! Every input (a line on stdin, a finished catalog fetch) becomes a
//! [`Message`] and flows through [`App::update`](crate::App::update).

use cmap_catalog::{Catalog, CatalogError, FetchedCatalog};
use serde_json::Value;

/// Root message enum.
#[derive(Debug)]
pub enum Message {
    /// Filter edits from facet controls, the tag input or the graph view.
    Filter(FilterMessage),

    /// UI toggle flips.
    Preference(PreferenceMessage),

    /// Catalog fetch completions.
    Catalog(CatalogMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterMessage {
    /// A facet control emitted a new selection.
    FacetChanged { facet: String, selection: Value },

    /// The graph view replaced the course selection.
    SetCourses(Vec<String>),

    /// A course was typed into the tag input.
    AddCourse(String),

    /// A course tag was removed.
    RemoveCourse(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceMessage {
    Toggle(String),
}

#[derive(Debug)]
pub enum CatalogMessage {
    Loaded {
        which: FetchedCatalog,
        result: Result<Catalog, CatalogError>,
    },
}

impl From<FilterMessage> for Message {
    fn from(msg: FilterMessage) -> Self {
        Self::Filter(msg)
    }
}

impl From<PreferenceMessage> for Message {
    fn from(msg: PreferenceMessage) -> Self {
        Self::Preference(msg)
    }
}

impl From<CatalogMessage> for Message {
    fn from(msg: CatalogMessage) -> Self {
        Self::Catalog(msg)
    }
}
