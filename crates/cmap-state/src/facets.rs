//! Per-facet selection normalization.
//!
//! Selection controls emit whatever their picker produces: a list of option
//! objects for multi-selects, a single object for the direction picker,
//! `null` when a multi-select is cleared. [`FACET_TABLE`] records, for each
//! facet, which key carries the code and which normalizer turns the payload
//! into a [`FacetUpdate`]. This table is the only place that knows payload
//! shapes; adding a facet means adding a row.

use cmap_model::{CodeSet, Facet, QueryDirection};
use serde_json::Value;
use thiserror::Error;

/// Key of the option object that carries the code.
///
/// Fetched catalogs key options by `code`; compiled-in pickers by `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    Code,
    Value,
}

impl SelectionKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Value => "value",
        }
    }
}

/// How many options a facet's control can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Many,
    One,
}

/// Normalized replacement for one facet's slice of the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetUpdate {
    Codes(CodeSet),
    Direction(QueryDirection),
}

/// Why a selection payload could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("expected a list of options")]
    NotAList,

    #[error("expected a single option object")]
    NotAnObject,

    #[error("option {index} has no '{key}'")]
    MissingKey { index: usize, key: &'static str },

    #[error("option {index} has an empty '{key}'")]
    EmptyCode { index: usize, key: &'static str },

    #[error("selection was cleared")]
    Cleared,

    #[error("unknown query direction {0:?}")]
    UnknownDirection(String),
}

/// One row of the facet configuration table.
pub struct FacetSpec {
    pub facet: Facet,
    pub key: SelectionKey,
    pub arity: Arity,
    normalize: fn(&FacetSpec, &Value) -> Result<FacetUpdate, NormalizeError>,
}

impl FacetSpec {
    /// Turn a raw selection payload into this facet's replacement value.
    pub fn normalize(&self, selection: &Value) -> Result<FacetUpdate, NormalizeError> {
        (self.normalize)(self, selection)
    }
}

impl std::fmt::Debug for FacetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetSpec")
            .field("facet", &self.facet)
            .field("key", &self.key)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Facet configuration table, in [`Facet::ALL`] order.
pub static FACET_TABLE: [FacetSpec; 7] = [
    FacetSpec {
        facet: Facet::Courses,
        key: SelectionKey::Code,
        arity: Arity::Many,
        normalize: normalize_codes,
    },
    FacetSpec {
        facet: Facet::Type,
        key: SelectionKey::Value,
        arity: Arity::One,
        normalize: normalize_direction,
    },
    FacetSpec {
        facet: Facet::Fields,
        key: SelectionKey::Code,
        arity: Arity::Many,
        normalize: normalize_codes,
    },
    FacetSpec {
        facet: Facet::Campus,
        key: SelectionKey::Value,
        arity: Arity::Many,
        normalize: normalize_codes,
    },
    FacetSpec {
        facet: Facet::Year,
        key: SelectionKey::Value,
        arity: Arity::Many,
        normalize: normalize_codes,
    },
    FacetSpec {
        facet: Facet::Semesters,
        key: SelectionKey::Value,
        arity: Arity::Many,
        normalize: normalize_codes,
    },
    FacetSpec {
        facet: Facet::Breadth,
        key: SelectionKey::Code,
        arity: Arity::Many,
        normalize: normalize_codes,
    },
];

/// Table row for `facet`.
pub fn spec(facet: Facet) -> &'static FacetSpec {
    let index = Facet::ALL
        .iter()
        .position(|f| *f == facet)
        .unwrap_or_default();
    &FACET_TABLE[index]
}

/// Read a code token; numbers are accepted for year levels.
fn token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn normalize_codes(spec: &FacetSpec, selection: &Value) -> Result<FacetUpdate, NormalizeError> {
    let key = spec.key.as_str();
    let items = match selection {
        Value::Null => return Ok(FacetUpdate::Codes(CodeSet::new())),
        Value::Array(items) => items,
        _ => return Err(NormalizeError::NotAList),
    };

    let mut codes = CodeSet::new();
    for (index, item) in items.iter().enumerate() {
        let code = item
            .get(key)
            .and_then(token)
            .ok_or(NormalizeError::MissingKey { index, key })?;
        if code.is_empty() {
            return Err(NormalizeError::EmptyCode { index, key });
        }
        codes.insert(code);
    }
    Ok(FacetUpdate::Codes(codes))
}

fn normalize_direction(
    spec: &FacetSpec,
    selection: &Value,
) -> Result<FacetUpdate, NormalizeError> {
    let key = spec.key.as_str();
    let object = match selection {
        Value::Null => return Err(NormalizeError::Cleared),
        Value::Array(items) if items.is_empty() => return Err(NormalizeError::Cleared),
        Value::Object(object) if object.is_empty() => return Err(NormalizeError::Cleared),
        Value::Object(object) => object,
        _ => return Err(NormalizeError::NotAnObject),
    };

    let raw = match object.get(key) {
        None | Some(Value::Null) => return Err(NormalizeError::Cleared),
        Some(Value::String(s)) if s.is_empty() => return Err(NormalizeError::Cleared),
        Some(Value::String(s)) => s,
        Some(_) => return Err(NormalizeError::MissingKey { index: 0, key }),
    };

    raw.parse()
        .map(FacetUpdate::Direction)
        .map_err(|_| NormalizeError::UnknownDirection(raw.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_covers_every_facet_in_order() {
        for (row, facet) in FACET_TABLE.iter().zip(Facet::ALL) {
            assert_eq!(row.facet, facet);
            assert_eq!(row.arity == Arity::Many, facet.is_multi());
        }
        assert_eq!(spec(Facet::Breadth).facet, Facet::Breadth);
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(spec(Facet::Courses).key, SelectionKey::Code);
        assert_eq!(spec(Facet::Fields).key, SelectionKey::Code);
        assert_eq!(spec(Facet::Breadth).key, SelectionKey::Code);
        assert_eq!(spec(Facet::Campus).key, SelectionKey::Value);
        assert_eq!(spec(Facet::Year).key, SelectionKey::Value);
        assert_eq!(spec(Facet::Semesters).key, SelectionKey::Value);
        assert_eq!(spec(Facet::Type).key, SelectionKey::Value);
    }

    #[test]
    fn test_codes_extracted_in_order() {
        let update = spec(Facet::Courses)
            .normalize(&json!([
                {"code": "MAT102H5", "name": "Math"},
                {"code": "CSC108H5", "name": "Intro"},
                {"code": "MAT102H5", "name": "Math"}
            ]))
            .unwrap();
        assert_eq!(
            update,
            FacetUpdate::Codes(CodeSet::from_codes(["MAT102H5", "CSC108H5"]))
        );
    }

    #[test]
    fn test_numeric_year_values() {
        let update = spec(Facet::Year)
            .normalize(&json!([{"value": 1, "label": "First Year"}, {"value": "5+"}]))
            .unwrap();
        assert_eq!(update, FacetUpdate::Codes(CodeSet::from_codes(["1", "5+"])));
    }

    #[test]
    fn test_null_clears_multi_select() {
        let update = spec(Facet::Campus).normalize(&Value::Null).unwrap();
        assert_eq!(update, FacetUpdate::Codes(CodeSet::new()));
    }

    #[test]
    fn test_wrong_key_is_malformed() {
        let err = spec(Facet::Campus)
            .normalize(&json!([{"code": "UTM"}]))
            .unwrap_err();
        assert_eq!(err, NormalizeError::MissingKey { index: 0, key: "value" });
    }

    #[test]
    fn test_empty_code_is_malformed() {
        let err = spec(Facet::Fields)
            .normalize(&json!([{"code": "CSC"}, {"code": ""}]))
            .unwrap_err();
        assert_eq!(err, NormalizeError::EmptyCode { index: 1, key: "code" });
    }

    #[test]
    fn test_direction() {
        let update = spec(Facet::Type)
            .normalize(&json!({"value": "postrequisites", "label": "Postrequisites"}))
            .unwrap();
        assert_eq!(update, FacetUpdate::Direction(QueryDirection::Postrequisites));
    }

    #[test]
    fn test_direction_clear_events() {
        for cleared in [json!(null), json!([]), json!({}), json!({"value": ""})] {
            assert_eq!(
                spec(Facet::Type).normalize(&cleared),
                Err(NormalizeError::Cleared)
            );
        }
        assert!(matches!(
            spec(Facet::Type).normalize(&json!({"value": "sideways"})),
            Err(NormalizeError::UnknownDirection(_))
        ));
        assert_eq!(
            spec(Facet::Type).normalize(&json!([{"value": "prerequisites"}])),
            Err(NormalizeError::NotAnObject)
        );
    }
}
