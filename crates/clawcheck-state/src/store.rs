//! # ChecklistStore — The Single Mutating Owner
//!
//! `ChecklistStore` pairs the immutable catalog with the persisted aggregate
//! and a storage backend. It is the only code that mutates `ChecklistState`;
//! every mutation stamps `lastUpdated` and persists the whole aggregate
//! before returning.
//!
//! Mutations are infallible: unknown identifiers resolve to defaults,
//! unknown profiles are a tolerant no-op, and persistence failures are
//! logged and swallowed (best-effort storage).

use clawcheck_catalog::Catalog;
use clawcheck_core::{ControlId, ControlStatus, ProfileId, Timestamp};

use crate::state::{ChecklistState, ControlState};
use crate::stats::{self, CategoryStats, Stats};
use crate::storage::StateStorage;
use crate::{export, ExportDocument};

/// Substring in a record's notes marking it as auto-set by a profile.
///
/// Profile application writes `Auto-set by <title> profile` into the notes;
/// the rollback on profile switch looks for this marker to distinguish
/// auto-set not-applicable records from user-chosen ones. A user who writes
/// the word "profile" into their own notes on a not-applicable control will
/// have that record rolled back on the next profile switch — a known
/// limitation of the marker.
const AUTO_SET_MARKER: &str = "profile";

/// The checklist state store.
///
/// Construct with [`ChecklistStore::open`], passing the catalog and a
/// storage backend. The store loads the existing slot (merging defaults
/// over anything missing) or starts from the default aggregate.
pub struct ChecklistStore {
    catalog: Catalog,
    state: ChecklistState,
    storage: Box<dyn StateStorage>,
}

impl std::fmt::Debug for ChecklistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecklistStore")
            .field("catalog", &self.catalog)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ChecklistStore {
    /// Open a store over the given catalog and storage slot.
    ///
    /// An empty, missing, or unreadable slot yields the default aggregate;
    /// opening never fails.
    pub fn open(catalog: Catalog, mut storage: Box<dyn StateStorage>) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => ChecklistState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load checklist state; using defaults");
                ChecklistState::default()
            }
        };
        Self {
            catalog,
            state,
            storage,
        }
    }

    /// The catalog this store reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current aggregate (read-only; mutate through the operations).
    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    /// The stored record for `id`, or the default sentinel if none exists.
    ///
    /// Pure read. Unknown identifiers are valid input.
    pub fn control_state(&self, id: &ControlId) -> ControlState {
        self.state.control(id)
    }

    /// Set a control's review status.
    ///
    /// Materializes the default record if absent, stamps the record and the
    /// aggregate, and persists.
    pub fn set_control_status(&mut self, id: &ControlId, status: ControlStatus) {
        let now = Timestamp::now();
        let record = self.state.controls.entry(id.clone()).or_default();
        record.status = status;
        record.last_modified = Some(now);
        self.state.last_updated = now;
        self.persist();
    }

    /// Set a control's notes.
    ///
    /// Same materialize-then-mutate pattern as status; the empty string is
    /// a valid value.
    pub fn set_control_notes(&mut self, id: &ControlId, notes: impl Into<String>) {
        let now = Timestamp::now();
        let record = self.state.controls.entry(id.clone()).or_default();
        record.notes = notes.into();
        record.last_modified = Some(now);
        self.state.last_updated = now;
        self.persist();
    }

    /// Switch the active profile and recompute not-applicable presets.
    ///
    /// Unknown profile identifiers are a tolerant no-op. Otherwise, in
    /// order: the previous profile's auto-set not-applicable records are
    /// rolled back to the default sentinel (fresh timestamp), every
    /// cataloged control gets a record, and the new profile's
    /// not-applicable set is forced to not-applicable with an auto-set
    /// note — overwriting prior status and notes, user-entered ones
    /// included.
    pub fn apply_profile(&mut self, profile_id: &ProfileId) {
        let Some(profile) = self.catalog.profile(profile_id) else {
            return;
        };
        let new_title = profile.title.clone();
        let new_not_applicable = profile.not_applicable.clone();
        let previous_not_applicable = self
            .catalog
            .profile(&self.state.profile)
            .map(|p| p.not_applicable.clone());

        let now = Timestamp::now();
        self.state.profile = profile_id.clone();

        // Roll back records the previous profile auto-marked.
        if let Some(previous) = previous_not_applicable {
            for id in &previous {
                if let Some(record) = self.state.controls.get_mut(id) {
                    if record.status == ControlStatus::NotApplicable
                        && record.notes.contains(AUTO_SET_MARKER)
                    {
                        *record = ControlState {
                            status: ControlStatus::Unreviewed,
                            notes: String::new(),
                            last_modified: Some(now),
                        };
                    }
                }
            }
        }

        // Materialize a record for every cataloged control.
        let all_ids: Vec<ControlId> =
            self.catalog.controls.iter().map(|c| c.id.clone()).collect();
        for id in all_ids {
            self.state.controls.entry(id).or_default();
        }

        // Force the new profile's presets, overwriting whatever was there.
        for id in new_not_applicable {
            self.state.controls.insert(
                id,
                ControlState {
                    status: ControlStatus::NotApplicable,
                    notes: format!("Auto-set by {new_title} profile"),
                    last_modified: Some(now),
                },
            );
        }

        self.state.last_updated = now;
        self.persist();
    }

    /// Replace the aggregate with the default value.
    pub fn reset_all(&mut self) {
        self.state = ChecklistState::default();
        self.persist();
    }

    /// Build the export snapshot. Pure read; no persistence side effect.
    pub fn export_state(&self) -> ExportDocument {
        export::export_document(&self.catalog, &self.state)
    }

    /// Aggregate statistics over the full catalog.
    pub fn stats(&self) -> Stats {
        stats::compute_stats(&self.catalog, &self.state)
    }

    /// Per-category statistics, in catalog order.
    pub fn category_stats(&self) -> Vec<CategoryStats> {
        stats::compute_category_stats(&self.catalog, &self.state)
    }

    /// Persist the aggregate; failures degrade to a warning.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.state) {
            tracing::warn!(error = %e, "failed to persist checklist state");
        }
    }
}
