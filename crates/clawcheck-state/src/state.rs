//! # Persisted State Shapes
//!
//! `ControlState` and the `ChecklistState` aggregate. The wire format is
//! camelCase JSON, byte-compatible with the document the documentation
//! site's checklist widget keeps in browser storage, so an existing slot
//! loads unchanged.
//!
//! Every field carries a serde default: loading a partial document fills the
//! gaps from the default aggregate instead of failing (forward-compatible
//! merge).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use clawcheck_core::{temporal, ControlId, ControlStatus, ProfileId, Timestamp};

/// Current schema version of the persisted aggregate.
pub const STATE_VERSION: u32 = 1;

/// Per-control mutable record.
///
/// The default value is the sentinel returned for controls with no stored
/// record: `unreviewed`, empty notes, never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlState {
    /// Review status.
    pub status: ControlStatus,
    /// Free-text notes; empty is a valid, distinct value from "no record".
    pub notes: String,
    /// When this record was last mutated; `None` (empty string on the wire)
    /// until the first mutation.
    #[serde(with = "temporal::iso_string")]
    pub last_modified: Option<Timestamp>,
}

impl ControlState {
    /// Whether this record is indistinguishable from "no record".
    pub fn is_default(&self) -> bool {
        self.status == ControlStatus::Unreviewed
            && self.notes.is_empty()
            && self.last_modified.is_none()
    }
}

/// The persisted checklist aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChecklistState {
    /// Schema version, currently [`STATE_VERSION`].
    pub version: u32,
    /// Timestamp of the most recent mutation.
    #[serde(with = "temporal::iso")]
    pub last_updated: Timestamp,
    /// Currently selected profile.
    pub profile: ProfileId,
    /// Per-control records. Controls absent from the map are implicitly
    /// unreviewed. `BTreeMap` keeps the persisted document deterministic.
    pub controls: BTreeMap<ControlId, ControlState>,
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            last_updated: Timestamp::now(),
            profile: ProfileId::new("personal"),
            controls: BTreeMap::new(),
        }
    }
}

impl ChecklistState {
    /// The stored record for `id`, or the default sentinel.
    pub fn control(&self, id: &ControlId) -> ControlState {
        self.controls.get(id).cloned().unwrap_or_default()
    }

    /// The status of `id`, resolving absent records to `Unreviewed`.
    pub fn status_of(&self, id: &ControlId) -> ControlStatus {
        self.controls
            .get(id)
            .map(|c| c.status)
            .unwrap_or(ControlStatus::Unreviewed)
    }
}
