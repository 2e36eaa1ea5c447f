//! Wire records returned by the catalog endpoints.

use std::collections::HashSet;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;

/// One course from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    #[serde(default, alias = "sectionCode")]
    pub semesters: Vec<String>,
}

impl From<CourseRecord> for CatalogEntry {
    fn from(record: CourseRecord) -> Self {
        CatalogEntry::new(record.code, record.name).with_semesters(record.semesters)
    }
}

/// A department (field of study).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Department {
    pub code: String,
    pub name: String,
}

/// One course-to-field association from the fields endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldAssociation {
    #[serde(default)]
    pub code: Option<String>,
    pub department: Department,
}

/// Build the course catalog, skipping records without a code.
pub fn course_catalog(records: Vec<CourseRecord>) -> Catalog {
    records
        .into_iter()
        .filter(|record| !record.code.is_empty())
        .map(CatalogEntry::from)
        .collect()
}

/// Collapse course-to-field associations into one entry per department.
///
/// Departments keep the order of their first association.
pub fn group_fields(associations: Vec<FieldAssociation>) -> Catalog {
    let mut seen = HashSet::new();
    associations
        .into_iter()
        .map(|association| association.department)
        .filter(|department| !department.code.is_empty() && seen.insert(department.code.clone()))
        .map(|department| CatalogEntry::new(department.code, department.name))
        .collect()
}
