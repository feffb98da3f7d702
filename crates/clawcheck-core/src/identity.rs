//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the checklist's identifier namespaces. These prevent
//! accidental identifier confusion — you cannot pass a `CategoryId` where a
//! `ControlId` is expected.
//!
//! Identifiers here are human-authored catalog slugs (e.g. `auth-token-ttl`,
//! `gateway`, `personal`), not generated values, so the newtypes wrap
//! `String` and serialize transparently.

use serde::{Deserialize, Serialize};

/// Unique identifier for a checklist control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

/// Unique identifier for a control category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

/// Unique identifier for a deployment profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ControlId {
    /// Wrap a control identifier slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CategoryId {
    /// Wrap a category identifier slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ProfileId {
    /// Wrap a profile identifier slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_id_display_is_bare_slug() {
        let id = ControlId::new("auth-token-ttl");
        assert_eq!(id.to_string(), "auth-token-ttl");
        assert_eq!(id.as_str(), "auth-token-ttl");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = ProfileId::new("personal");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"personal\"");
        let parsed: ProfileId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ids_usable_as_map_keys() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(ControlId::new("b"), 2);
        map.insert(ControlId::new("a"), 1);
        let keys: Vec<_> = map.keys().map(ControlId::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
