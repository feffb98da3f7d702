//! # Export Document
//!
//! A structured, self-describing snapshot of the checklist for user-facing
//! download: export timestamp, active profile, summary counts, and every
//! cataloged control's static fields merged with its current state, in
//! catalog order. Building the document is a pure read with no persistence
//! side effect.

use serde::{Deserialize, Serialize};

use clawcheck_catalog::Catalog;
use clawcheck_core::{
    temporal, CategoryId, ClawcheckError, ControlId, ControlStatus, ProfileId, Severity, Timestamp,
};

use crate::state::ChecklistState;

/// Summary counts over the full catalog at export time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    /// Catalog size.
    pub total: usize,
    /// Compliant controls.
    pub compliant: usize,
    /// Non-compliant controls.
    pub non_compliant: usize,
    /// Not-applicable controls.
    pub not_applicable: usize,
    /// Unreviewed controls (no record counts as unreviewed).
    pub unreviewed: usize,
}

/// One exported control: catalog static fields plus current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedControl {
    /// Control identifier.
    pub id: ControlId,
    /// Human-readable title.
    pub title: String,
    /// Category identifier.
    pub category: CategoryId,
    /// Priority tier.
    pub severity: Severity,
    /// Configuration-path reference.
    pub config_path: String,
    /// Current review status.
    pub status: ControlStatus,
    /// Current notes.
    pub notes: String,
    /// When the record was last mutated; empty string if never.
    #[serde(with = "temporal::iso_string")]
    pub last_modified: Option<Timestamp>,
}

/// The export snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// When the export was produced.
    #[serde(with = "temporal::iso")]
    pub exported_at: Timestamp,
    /// Active profile at export time.
    pub profile: ProfileId,
    /// Summary counts.
    pub summary: ExportSummary,
    /// Every cataloged control, in catalog order.
    pub controls: Vec<ExportedControl>,
}

impl ExportDocument {
    /// Render as human-pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ClawcheckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the export snapshot for the current `(catalog, state)` pair.
pub fn export_document(catalog: &Catalog, state: &ChecklistState) -> ExportDocument {
    let mut summary = ExportSummary {
        total: catalog.len(),
        compliant: 0,
        non_compliant: 0,
        not_applicable: 0,
        unreviewed: 0,
    };

    let controls = catalog
        .controls
        .iter()
        .map(|record| {
            let current = state.control(&record.id);
            match current.status {
                ControlStatus::Unreviewed => summary.unreviewed += 1,
                ControlStatus::Compliant => summary.compliant += 1,
                ControlStatus::NonCompliant => summary.non_compliant += 1,
                ControlStatus::NotApplicable => summary.not_applicable += 1,
            }
            ExportedControl {
                id: record.id.clone(),
                title: record.title.clone(),
                category: record.category.clone(),
                severity: record.severity,
                config_path: record.config_path.clone(),
                status: current.status,
                notes: current.notes,
                last_modified: current.last_modified,
            }
        })
        .collect();

    ExportDocument {
        exported_at: Timestamp::now(),
        profile: state.profile.clone(),
        summary,
        controls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ControlState;
    use clawcheck_catalog::{Category, ControlRecord, Profile};

    fn catalog() -> Catalog {
        Catalog {
            controls: vec![
                ControlRecord {
                    id: "gw".into(),
                    title: "Gateway bind".into(),
                    category: "net".into(),
                    severity: Severity::Critical,
                    config_path: "gateway.bind".into(),
                },
                ControlRecord {
                    id: "ttl".into(),
                    title: "Token TTL".into(),
                    category: "net".into(),
                    severity: Severity::High,
                    config_path: "auth.ttl".into(),
                },
            ],
            categories: vec![Category {
                id: "net".into(),
                title: "Network".into(),
                description: None,
            }],
            profiles: vec![Profile {
                id: "personal".into(),
                title: "Personal".into(),
                not_applicable: vec![],
            }],
        }
    }

    #[test]
    fn test_summary_counts_sum_to_total() {
        let mut state = ChecklistState::default();
        state.controls.insert(
            "gw".into(),
            ControlState {
                status: ControlStatus::Compliant,
                notes: "bound to loopback".into(),
                last_modified: Some(Timestamp::now()),
            },
        );

        let doc = export_document(&catalog(), &state);
        let s = &doc.summary;
        assert_eq!(
            s.compliant + s.non_compliant + s.not_applicable + s.unreviewed,
            s.total
        );
        assert_eq!(s.compliant, 1);
        assert_eq!(s.unreviewed, 1);
    }

    #[test]
    fn test_controls_in_catalog_order_with_merged_state() {
        let mut state = ChecklistState::default();
        state.controls.insert(
            "ttl".into(),
            ControlState {
                status: ControlStatus::NonCompliant,
                notes: "no expiry".into(),
                last_modified: Some(Timestamp::parse("2026-02-01T00:00:00Z").unwrap()),
            },
        );

        let doc = export_document(&catalog(), &state);
        assert_eq!(doc.controls.len(), 2);
        assert_eq!(doc.controls[0].id.as_str(), "gw");
        assert_eq!(doc.controls[0].status, ControlStatus::Unreviewed);
        assert_eq!(doc.controls[1].id.as_str(), "ttl");
        assert_eq!(doc.controls[1].notes, "no expiry");
        assert_eq!(doc.controls[1].config_path, "auth.ttl");
    }

    #[test]
    fn test_json_contract_field_names() {
        let doc = export_document(&catalog(), &ChecklistState::default());
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"configPath\""));
        assert!(json.contains("\"notApplicable\""));
        assert!(json.contains("\"lastModified\": \"\""));
    }

    #[test]
    fn test_export_document_roundtrip() {
        let doc = export_document(&catalog(), &ChecklistState::default());
        let json = doc.to_json_pretty().unwrap();
        let parsed: ExportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
