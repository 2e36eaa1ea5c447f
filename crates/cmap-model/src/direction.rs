//! Query direction (prerequisites vs. postrequisites).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Which way the graph traversal walks from the selected courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryDirection {
    /// Courses that must be taken before the selection.
    #[default]
    Prerequisites,
    /// Courses the selection unlocks.
    Postrequisites,
}

impl QueryDirection {
    /// All directions, in picker order.
    pub const ALL: [QueryDirection; 2] = [Self::Prerequisites, Self::Postrequisites];

    /// Wire token used in persisted documents and the renderer contract.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prerequisites => "prerequisites",
            Self::Postrequisites => "postrequisites",
        }
    }

    /// Get display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Prerequisites => "Prerequisites",
            Self::Postrequisites => "Postrequisites",
        }
    }

    /// Decode a persisted `type` field, substituting the default for
    /// missing, empty or unknown values.
    pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw
            .as_str()
            .and_then(|token| token.parse().ok())
            .unwrap_or_default())
    }
}

impl FromStr for QueryDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prerequisites" => Ok(Self::Prerequisites),
            "postrequisites" => Ok(Self::Postrequisites),
            other => Err(format!("unknown query direction: {other:?}")),
        }
    }
}

impl fmt::Display for QueryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
