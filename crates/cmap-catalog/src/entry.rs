//! Catalog entries and their display helpers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique key within its catalog.
    pub code: String,

    /// Display label.
    pub name: String,

    /// Semester offering tokens (`F`, `W`, `S`, `Y`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub semesters: Vec<String>,

    /// Grouping key (e.g. the campus a breadth category belongs to).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            semesters: Vec::new(),
            group: None,
        }
    }

    #[must_use]
    pub fn with_semesters<I, S>(mut self, semesters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.semesters = semesters.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Label shown in an open picker menu: `"CSC108H5: Intro to CS"`.
    pub fn option_label(&self) -> String {
        format!("{}: {}", self.code, self.name)
    }

    /// Badge for the semesters this entry is offered in.
    pub fn season_badge(&self) -> String {
        season_badge(&self.semesters)
    }

    /// The object a picker emits when this entry is selected, with the
    /// code stored under `key` (`code` for fetched catalogs, `value` for
    /// compiled-in ones).
    pub fn to_selection(&self, key: &str) -> Value {
        let mut object = Map::new();
        object.insert(key.to_string(), Value::String(self.code.clone()));
        object.insert("label".to_string(), Value::String(self.name.clone()));
        if key != "name" {
            object.insert("name".to_string(), Value::String(self.name.clone()));
        }
        Value::Object(object)
    }
}

/// Season badge for a set of offering tokens.
///
/// A full-year offering (`Y`) shows both autumn and winter; otherwise each
/// of `F` and `W` contributes its own symbol. Summer (`S`) is appended in
/// either case.
pub fn season_badge<S: AsRef<str>>(semesters: &[S]) -> String {
    let has = |token: &str| semesters.iter().any(|s| s.as_ref() == token);

    let mut badge = String::new();
    if has("Y") {
        badge.push_str("🍁❄️");
    } else {
        if has("F") {
            badge.push('🍁');
        }
        if has("W") {
            badge.push_str("❄️");
        }
    }
    if has("S") {
        badge.push_str("☀️");
    }
    badge
}
