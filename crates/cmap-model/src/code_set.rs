//! Ordered set of facet codes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered list of unique, non-empty codes.
///
/// Order carries no meaning for queries but is kept so pickers show
/// selections in the order the user made them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeSet(Vec<String>);

impl CodeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a set from codes, dropping empty strings and repeats.
    ///
    /// The first occurrence of a repeated code wins its position.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for code in codes {
            set.insert(code);
        }
        set
    }

    /// Append a code. Returns `false` when the code is empty or present.
    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if code.is_empty() || self.contains(&code) {
            return false;
        }
        self.0.push(code);
        true
    }

    /// Remove the code at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    /// Case-insensitive membership, used for free-text course entry.
    pub fn contains_ignore_case(&self, code: &str) -> bool {
        self.0.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for CodeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_codes(iter)
    }
}

impl<'a> IntoIterator for &'a CodeSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for CodeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Persisted token: older documents stored year levels as bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for CodeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tokens = Vec::<RawToken>::deserialize(deserializer)?;
        Ok(tokens
            .into_iter()
            .map(|token| match token {
                RawToken::Text(text) => text,
                RawToken::Number(n) => n.to_string(),
            })
            .collect())
    }
}
