//! # Catalog Validation
//!
//! Referential-integrity checks over a parsed catalog. The state engine
//! trusts the catalog completely, so every inconsistency must be caught
//! here, at load time.

use std::collections::HashSet;

use clawcheck_core::ClawcheckError;

use crate::model::Catalog;

impl Catalog {
    /// Validate referential integrity.
    ///
    /// Checks, in order:
    ///
    /// 1. Control, category, and profile identifiers are unique within
    ///    their namespace.
    /// 2. Every control references an existing category.
    /// 3. Every profile's not-applicable entry names a cataloged control.
    ///
    /// # Errors
    ///
    /// Returns a `Catalog` error naming the first offending identifier.
    pub fn validate(&self) -> Result<(), ClawcheckError> {
        let mut control_ids = HashSet::new();
        for control in &self.controls {
            if !control_ids.insert(&control.id) {
                return Err(ClawcheckError::Catalog(format!(
                    "duplicate control id {:?}",
                    control.id.as_str()
                )));
            }
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(ClawcheckError::Catalog(format!(
                    "duplicate category id {:?}",
                    category.id.as_str()
                )));
            }
        }

        let mut profile_ids = HashSet::new();
        for profile in &self.profiles {
            if !profile_ids.insert(&profile.id) {
                return Err(ClawcheckError::Catalog(format!(
                    "duplicate profile id {:?}",
                    profile.id.as_str()
                )));
            }
        }

        for control in &self.controls {
            if !category_ids.contains(&control.category) {
                return Err(ClawcheckError::Catalog(format!(
                    "control {:?} references unknown category {:?}",
                    control.id.as_str(),
                    control.category.as_str()
                )));
            }
        }

        for profile in &self.profiles {
            for id in &profile.not_applicable {
                if !control_ids.contains(id) {
                    return Err(ClawcheckError::Catalog(format!(
                        "profile {:?} marks unknown control {:?} not-applicable",
                        profile.id.as_str(),
                        id.as_str()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clawcheck_core::Severity;

    use crate::model::{Catalog, Category, ControlRecord, Profile};

    fn control(id: &str, category: &str) -> ControlRecord {
        ControlRecord {
            id: id.into(),
            title: id.to_uppercase(),
            category: category.into(),
            severity: Severity::Medium,
            config_path: format!("{category}.{id}"),
        }
    }

    fn category(id: &str) -> Category {
        Category {
            id: id.into(),
            title: id.to_uppercase(),
            description: None,
        }
    }

    fn valid_catalog() -> Catalog {
        Catalog {
            controls: vec![control("a", "cat"), control("b", "cat")],
            categories: vec![category("cat")],
            profiles: vec![Profile {
                id: "personal".into(),
                title: "Personal".into(),
                not_applicable: vec!["b".into()],
            }],
        }
    }

    #[test]
    fn test_valid_catalog_passes() {
        assert!(valid_catalog().validate().is_ok());
    }

    #[test]
    fn test_duplicate_control_id_rejected() {
        let mut catalog = valid_catalog();
        catalog.controls.push(control("a", "cat"));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate control id"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut catalog = valid_catalog();
        catalog.controls.push(control("c", "ghost"));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn test_profile_with_unknown_control_rejected() {
        let mut catalog = valid_catalog();
        catalog.profiles[0].not_applicable.push("ghost".into());
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown control"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(Catalog::default().validate().is_ok());
    }
}
