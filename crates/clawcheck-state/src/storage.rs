//! # State Storage — One Durable Slot
//!
//! The persistence seam of the engine. Storage is a single key-value slot
//! holding the serialized aggregate; the slot is keyed by the same fixed
//! namespace string the documentation site's widget uses for its browser
//! storage entry.
//!
//! Backends are injected into the store at construction — there is no
//! process-global slot. `FileStorage` is the durable backend;
//! `MemoryStorage` backs tests and embedders that manage durability
//! themselves.
//!
//! ## Failure Policy
//!
//! Loading degrades: a missing slot yields `None`, a corrupted payload is
//! logged and yields `None`. Only raw IO failures (other than not-found)
//! surface as errors, and the store downgrades those to a warning too.

use std::path::{Path, PathBuf};

use clawcheck_core::ClawcheckError;

use crate::state::ChecklistState;

/// Fixed namespace string keying the durable slot.
pub const STORAGE_NAMESPACE: &str = "openclaw-security-checklist";

/// A durable slot for the checklist aggregate.
pub trait StateStorage {
    /// Read the slot. `Ok(None)` when the slot is empty or unreadable in a
    /// recoverable way.
    fn load(&mut self) -> Result<Option<ChecklistState>, ClawcheckError>;

    /// Overwrite the slot with the whole aggregate.
    fn save(&mut self, state: &ChecklistState) -> Result<(), ClawcheckError>;
}

/// File-backed storage: one pretty-printed JSON document per slot.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage in a directory, named by the fixed namespace string
    /// (`<dir>/openclaw-security-checklist.json`).
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_NAMESPACE}.json")),
        }
    }

    /// The file backing this slot.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStorage for FileStorage {
    fn load(&mut self) -> Result<Option<ChecklistState>, ClawcheckError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                // Corrupted slot: start over from defaults rather than fail.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unreadable checklist state"
                );
                Ok(None)
            }
        }
    }

    fn save(&mut self, state: &ChecklistState) -> Result<(), ClawcheckError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process storage slot for tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<ChecklistState>,
}

impl MemoryStorage {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with an existing aggregate.
    pub fn with_state(state: ChecklistState) -> Self {
        Self { slot: Some(state) }
    }
}

impl StateStorage for MemoryStorage {
    fn load(&mut self) -> Result<Option<ChecklistState>, ClawcheckError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, state: &ChecklistState) -> Result<(), ClawcheckError> {
        self.slot = Some(state.clone());
        Ok(())
    }
}
