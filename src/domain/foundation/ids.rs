//! Strongly-typed identifier value objects.
//!
//! Both identifiers are assigned by the store, so there is no `new()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(i64);

impl SnippetId {
    /// Wraps a store-assigned id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnippetId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Identifier of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a store-assigned id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_id_displays_raw_number() {
        assert_eq!(SnippetId::from_i64(42).to_string(), "42");
    }

    #[test]
    fn snippet_id_parses_from_path_segment() {
        let id: SnippetId = "7".parse().unwrap();
        assert_eq!(id.as_i64(), 7);
        assert!("abc".parse::<SnippetId>().is_err());
        assert!("1.5".parse::<SnippetId>().is_err());
    }

    #[test]
    fn user_id_survives_string_storage() {
        let id = UserId::from_i64(12);
        let stored = id.to_string();
        assert_eq!(stored.parse::<UserId>().unwrap(), id);
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&UserId::from_i64(3)).unwrap();
        assert_eq!(json, "3");
    }
}
