//! The canonical search document.

use serde::{Deserialize, Serialize};

use crate::{CodeSet, Facet, QueryDirection};

/// The user's current search: selected courses, query direction and
/// facet selections.
///
/// Serialized as JSON under the `filters` storage key. Missing fields fall
/// back to their defaults; a missing or unknown `type` becomes
/// [`QueryDirection::default`] so the direction is never unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Course codes to start the traversal from.
    pub courses: CodeSet,

    /// Query direction.
    #[serde(rename = "type", deserialize_with = "QueryDirection::deserialize_lenient")]
    pub direction: QueryDirection,

    /// Field-of-study codes.
    pub fields: CodeSet,

    /// Campus codes.
    pub campus: CodeSet,

    /// Year-level tokens (`1`..`4`, `5+`).
    pub year: CodeSet,

    /// Semester tokens (`F`, `W`, `S`, `Y`, `G`).
    pub semesters: CodeSet,

    /// Breadth-requirement codes.
    pub breadth: CodeSet,
}

impl FilterState {
    /// Create a state with the given direction and nothing selected.
    pub fn with_direction(direction: QueryDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Codes selected for a multi-select facet. `None` for [`Facet::Type`].
    pub fn codes(&self, facet: Facet) -> Option<&CodeSet> {
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

    /// Mutable access to a multi-select facet. `None` for [`Facet::Type`].
    pub fn codes_mut(&mut self, facet: Facet) -> Option<&mut CodeSet> {
        match facet {
            Facet::Courses => Some(&mut self.courses),
            Facet::Type => None,
            Facet::Fields => Some(&mut self.fields),
            Facet::Campus => Some(&mut self.campus),
            Facet::Year => Some(&mut self.year),
            Facet::Semesters => Some(&mut self.semesters),
            Facet::Breadth => Some(&mut self.breadth),
        }
    }

    /// Whether nothing narrows the search besides the direction.
    pub fn is_empty(&self) -> bool {
        Facet::ALL
            .iter()
            .filter_map(|facet| self.codes(*facet))
            .all(CodeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_direction_as_type() {
        let state = FilterState::with_direction(QueryDirection::Postrequisites);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["type"], "postrequisites");
        assert_eq!(json["courses"], serde_json::json!([]));
    }

    #[test]
    fn test_codes_is_none_for_type() {
        let state = FilterState::default();
        assert!(state.codes(Facet::Type).is_none());
        assert!(state.codes(Facet::Year).is_some());
    }

    #[test]
    fn test_is_empty() {
        let mut state = FilterState::default();
        assert!(state.is_empty());
        state.campus.insert("UTM");
        assert!(!state.is_empty());
    }
}
