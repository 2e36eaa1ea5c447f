//! The renderer handoff document.

use cmap_model::QueryDirection;
use serde::{Deserialize, Serialize};

/// Codes-only query consumed by the graph renderer.
///
/// ```json
/// { "courses": ["CSC108H5"], "type": "prerequisites", "fields": [],
///   "campus": [], "year": [], "semesters": [], "breadth": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContract {
    pub courses: Vec<String>,
    #[serde(rename = "type")]
    pub direction: QueryDirection,
    pub fields: Vec<String>,
    pub campus: Vec<String>,
    pub year: Vec<String>,
    pub semesters: Vec<String>,
    pub breadth: Vec<String>,
}
