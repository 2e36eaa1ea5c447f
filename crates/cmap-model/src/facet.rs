//! Filter facets.

use std::fmt;

/// One independently selectable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Courses,
    Type,
    Fields,
    Campus,
    Year,
    Semesters,
    Breadth,
}

impl Facet {
    /// All facets, in the order they appear in the search bar and filter panel.
    pub const ALL: [Facet; 7] = [
        Self::Courses,
        Self::Type,
        Self::Fields,
        Self::Campus,
        Self::Year,
        Self::Semesters,
        Self::Breadth,
    ];

    /// Name used by selection controls and persisted documents.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Type => "type",
            Self::Fields => "fields",
            Self::Campus => "campus",
            Self::Year => "year",
            Self::Semesters => "semesters",
            Self::Breadth => "breadth",
        }
    }

    /// Get display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Courses => "Courses",
            Self::Type => "Search Type",
            Self::Fields => "Field of Study",
            Self::Campus => "Campus",
            Self::Year => "Year",
            Self::Semesters => "Semester",
            Self::Breadth => "Breadth Requirement",
        }
    }

    /// Resolve a control name, including the names older controls emitted
    /// (`field`, `section`). Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "courses" => Some(Self::Courses),
            "type" => Some(Self::Type),
            "fields" | "field" => Some(Self::Fields),
            "campus" => Some(Self::Campus),
            "year" => Some(Self::Year),
            "semesters" | "section" => Some(Self::Semesters),
            "breadth" => Some(Self::Breadth),
            _ => None,
        }
    }

    /// Whether this facet holds a set of codes (everything but `type`).
    #[inline]
    pub const fn is_multi(&self) -> bool {
        !matches!(self, Self::Type)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for facet in Facet::ALL {
            assert_eq!(Facet::from_name(facet.name()), Some(facet));
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(Facet::from_name("field"), Some(Facet::Fields));
        assert_eq!(Facet::from_name("section"), Some(Facet::Semesters));
        assert_eq!(Facet::from_name("colors"), None);
    }
}
