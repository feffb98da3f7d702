//! # Catalog Data Model
//!
//! The control/category/profile records and the `Catalog` aggregate. Wire
//! format is camelCase to match the dataset shipped with the documentation
//! site (`configPath`, `notApplicable`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use clawcheck_core::{CategoryId, ClawcheckError, ControlId, ProfileId, Severity};

/// A single checklist item representing one security requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRecord {
    /// Unique control identifier.
    pub id: ControlId,
    /// Human-readable title.
    pub title: String,
    /// Category this control belongs to.
    pub category: CategoryId,
    /// Priority tier.
    pub severity: Severity,
    /// Reference to the configuration setting the control covers.
    pub config_path: String,
}

/// A grouping of related controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Human-readable title.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named preset that marks a subset of controls not-applicable by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique profile identifier.
    pub id: ProfileId,
    /// Human-readable title (appears in auto-set notes).
    pub title: String,
    /// Controls this profile marks not-applicable, in declaration order.
    #[serde(default)]
    pub not_applicable: Vec<ControlId>,
}

/// The full read-only input dataset: controls, categories, and profiles,
/// each in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// Ordered control records.
    #[serde(default)]
    pub controls: Vec<ControlRecord>,
    /// Ordered category descriptors.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Ordered profile descriptors.
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Catalog {
    /// Number of controls in the catalog.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the catalog has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Look up a control record by identifier.
    pub fn control(&self, id: &ControlId) -> Option<&ControlRecord> {
        self.controls.iter().find(|c| &c.id == id)
    }

    /// Look up a category by identifier.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a profile by identifier.
    pub fn profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    /// Controls belonging to the given category, in catalog order.
    pub fn controls_in_category<'a>(
        &'a self,
        id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a ControlRecord> {
        self.controls.iter().filter(move |c| &c.category == id)
    }

    /// Parse a catalog from a YAML document and validate it.
    pub fn from_yaml_str(input: &str) -> Result<Self, ClawcheckError> {
        let catalog: Catalog = serde_yaml::from_str(input)
            .map_err(|e| ClawcheckError::Catalog(format!("invalid catalog YAML: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON document and validate it.
    pub fn from_json_str(input: &str) -> Result<Self, ClawcheckError> {
        let catalog: Catalog = serde_json::from_str(input)
            .map_err(|e| ClawcheckError::Catalog(format!("invalid catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file, choosing the parser by extension
    /// (`.yaml`/`.yml` for YAML, anything else JSON).
    pub fn load(path: &Path) -> Result<Self, ClawcheckError> {
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            _ => Self::from_json_str(&raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
controls:
  - id: gateway-bind
    title: Gateway binds to loopback only
    category: gateway
    severity: critical
    configPath: gateway.bind
  - id: auth-token-ttl
    title: Auth tokens expire
    category: auth
    severity: high
    configPath: auth.tokenTtl
categories:
  - id: gateway
    title: Gateway
  - id: auth
    title: Authentication
profiles:
  - id: personal
    title: Personal
    notApplicable: []
  - id: enterprise
    title: Enterprise
    notApplicable: [auth-token-ttl]
"#
    }

    #[test]
    fn test_yaml_parse_preserves_order() {
        let catalog = Catalog::from_yaml_str(sample_yaml()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.controls[0].id.as_str(), "gateway-bind");
        assert_eq!(catalog.controls[1].id.as_str(), "auth-token-ttl");
        assert_eq!(catalog.categories[0].id.as_str(), "gateway");
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::from_yaml_str(sample_yaml()).unwrap();
        let ctrl = catalog.control(&"gateway-bind".into()).unwrap();
        assert_eq!(ctrl.severity, Severity::Critical);
        assert_eq!(ctrl.config_path, "gateway.bind");
        assert!(catalog.control(&"unknown".into()).is_none());

        let profile = catalog.profile(&"enterprise".into()).unwrap();
        assert_eq!(profile.title, "Enterprise");
        assert_eq!(profile.not_applicable.len(), 1);
        assert!(catalog.profile(&"cloud".into()).is_none());
    }

    #[test]
    fn test_controls_in_category() {
        let catalog = Catalog::from_yaml_str(sample_yaml()).unwrap();
        let category = "auth".into();
        let ids: Vec<_> = catalog
            .controls_in_category(&category)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["auth-token-ttl"]);
    }

    #[test]
    fn test_json_parse() {
        let json = r#"{
            "controls": [
                {"id": "c1", "title": "C1", "category": "cat", "severity": "low", "configPath": "a.b"}
            ],
            "categories": [{"id": "cat", "title": "Cat"}],
            "profiles": []
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.controls[0].severity, Severity::Low);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("catalog.yaml");
        std::fs::write(&yaml_path, sample_yaml()).unwrap();
        let catalog = Catalog::load(&yaml_path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, ClawcheckError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml_is_catalog_error() {
        let err = Catalog::from_yaml_str("controls: {not: [a, list").unwrap_err();
        assert!(matches!(err, ClawcheckError::Catalog(_)));
    }
}
