//! # clawcheck-cli — Checklist Command-Line Interface
//!
//! Provides the `clawcheck` command, the calling layer over the state
//! store. CLI construction (argument parsing) is separated from the store
//! operations — handler functions delegate to `clawcheck-state` and hold no
//! business logic of their own.
//!
//! ## Subcommands
//!
//! - `clawcheck status <control-id> <status>` — set a control's review status.
//! - `clawcheck notes <control-id> <text>` — set a control's notes.
//! - `clawcheck show [control-id]` — print one control, or the whole checklist.
//! - `clawcheck profile <profile-id>` — apply a deployment profile.
//! - `clawcheck stats` — overall, per-severity, and per-category statistics.
//! - `clawcheck export` — write the export document.
//! - `clawcheck reset` — replace state with defaults.

pub mod control;
pub mod export;
pub mod profile;
pub mod reset;
pub mod stats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use clawcheck_catalog::Catalog;
use clawcheck_state::{ChecklistStore, FileStorage};

/// Resolve the state directory: an explicit flag wins, otherwise the
/// platform data directory plus `clawcheck`, falling back to the current
/// directory when the platform reports no data directory.
pub fn resolve_state_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match dirs::data_dir() {
        Some(data) => data.join("clawcheck"),
        None => PathBuf::from("."),
    }
}

/// Load the catalog and open the store over file-backed storage.
pub fn open_store(catalog_path: &Path, state_dir: Option<&Path>) -> Result<ChecklistStore> {
    let catalog = Catalog::load(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let dir = resolve_state_dir(state_dir);
    let storage = FileStorage::in_dir(&dir);
    tracing::debug!(slot = %storage.path().display(), "opening checklist store");
    Ok(ChecklistStore::open(catalog, Box::new(storage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_state_dir_wins() {
        let dir = resolve_state_dir(Some(Path::new("/tmp/claw")));
        assert_eq!(dir, PathBuf::from("/tmp/claw"));
    }

    #[test]
    fn test_open_store_with_missing_catalog_fails() {
        let err = open_store(Path::new("/nonexistent/catalog.yaml"), None).unwrap_err();
        assert!(err.to_string().contains("loading catalog"));
    }

    #[test]
    fn test_open_store_with_fresh_slot() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.yaml");
        std::fs::write(
            &catalog_path,
            r#"
controls:
  - id: gw
    title: Gateway
    category: net
    severity: critical
    configPath: gateway.bind
categories:
  - id: net
    title: Network
profiles:
  - id: personal
    title: Personal
"#,
        )
        .unwrap();

        let store = open_store(&catalog_path, Some(dir.path())).unwrap();
        assert_eq!(store.catalog().len(), 1);
        assert!(store.state().controls.is_empty());
    }
}
