//! # Derived Statistics — Pure Views
//!
//! Aggregate and per-category compliance statistics, computed as pure
//! functions of `(catalog, state)`. Nothing here caches: the calling layer
//! recomputes on every state change, so a view always reflects the latest
//! mutation.

use serde::{Deserialize, Serialize};

use clawcheck_catalog::Catalog;
use clawcheck_core::{CategoryId, ControlStatus, Severity};

use crate::state::ChecklistState;

/// Per-severity slice of the aggregate statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityStats {
    /// The severity tier.
    pub severity: Severity,
    /// Controls of this severity in the catalog.
    pub total: usize,
    /// How many of them are compliant.
    pub compliant: usize,
    /// How many of them are applicable (total minus not-applicable).
    pub applicable: usize,
}

/// Aggregate compliance statistics over the full catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Catalog size.
    pub total: usize,
    /// Controls with any status other than unreviewed.
    pub reviewed: usize,
    /// Compliant controls.
    pub compliant: usize,
    /// Non-compliant controls.
    pub non_compliant: usize,
    /// Not-applicable controls.
    pub not_applicable: usize,
    /// Total minus not-applicable; the compliance denominator.
    pub applicable: usize,
    /// `round(compliant / applicable × 100)`, or 0 when nothing is
    /// applicable. Always an integer in `[0, 100]`.
    pub compliance_percent: u32,
    /// Per-severity breakdown in the fixed order critical, high, medium, low.
    pub by_severity: Vec<SeverityStats>,
}

/// Per-category statistics row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Category identifier.
    pub id: CategoryId,
    /// Category title.
    pub title: String,
    /// Controls in the category.
    pub total: usize,
    /// Controls with any status other than unreviewed.
    pub reviewed: usize,
    /// Compliant controls.
    pub compliant: usize,
}

/// Compute the aggregate statistics.
pub fn compute_stats(catalog: &Catalog, state: &ChecklistState) -> Stats {
    let total = catalog.len();
    let mut reviewed = 0;
    let mut compliant = 0;
    let mut non_compliant = 0;
    let mut not_applicable = 0;

    for control in &catalog.controls {
        match state.status_of(&control.id) {
            ControlStatus::Unreviewed => {}
            ControlStatus::Compliant => {
                reviewed += 1;
                compliant += 1;
            }
            ControlStatus::NonCompliant => {
                reviewed += 1;
                non_compliant += 1;
            }
            ControlStatus::NotApplicable => {
                reviewed += 1;
                not_applicable += 1;
            }
        }
    }

    let applicable = total - not_applicable;
    let compliance_percent = percent(compliant, applicable);

    let by_severity = Severity::ALL
        .iter()
        .map(|&severity| {
            let mut sev_total = 0;
            let mut sev_compliant = 0;
            let mut sev_not_applicable = 0;
            for control in catalog.controls.iter().filter(|c| c.severity == severity) {
                sev_total += 1;
                match state.status_of(&control.id) {
                    ControlStatus::Compliant => sev_compliant += 1,
                    ControlStatus::NotApplicable => sev_not_applicable += 1,
                    _ => {}
                }
            }
            SeverityStats {
                severity,
                total: sev_total,
                compliant: sev_compliant,
                applicable: sev_total - sev_not_applicable,
            }
        })
        .collect();

    Stats {
        total,
        reviewed,
        compliant,
        non_compliant,
        not_applicable,
        applicable,
        compliance_percent,
        by_severity,
    }
}

/// Compute the per-category statistics, in catalog order.
pub fn compute_category_stats(catalog: &Catalog, state: &ChecklistState) -> Vec<CategoryStats> {
    catalog
        .categories
        .iter()
        .map(|category| {
            let mut total = 0;
            let mut reviewed = 0;
            let mut compliant = 0;
            for control in catalog.controls_in_category(&category.id) {
                total += 1;
                let status = state.status_of(&control.id);
                if status.is_reviewed() {
                    reviewed += 1;
                }
                if status == ControlStatus::Compliant {
                    compliant += 1;
                }
            }
            CategoryStats {
                id: category.id.clone(),
                title: category.title.clone(),
                total,
                reviewed,
                compliant,
            }
        })
        .collect()
}

/// Integer percentage, rounded half-up via f64, 0 when the denominator is 0.
fn percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((numerator as f64 / denominator as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ControlState;
    use clawcheck_catalog::{Category, ControlRecord, Profile};
    use clawcheck_core::Timestamp;

    fn catalog() -> Catalog {
        let control = |id: &str, category: &str, severity| ControlRecord {
            id: id.into(),
            title: format!("Control {id}"),
            category: category.into(),
            severity,
            config_path: format!("{category}.{id}"),
        };
        Catalog {
            controls: vec![
                control("c1", "net", Severity::Critical),
                control("c2", "net", Severity::High),
                control("c3", "app", Severity::Medium),
                control("c4", "app", Severity::Low),
            ],
            categories: vec![
                Category {
                    id: "net".into(),
                    title: "Network".into(),
                    description: None,
                },
                Category {
                    id: "app".into(),
                    title: "Application".into(),
                    description: None,
                },
            ],
            profiles: vec![Profile {
                id: "personal".into(),
                title: "Personal".into(),
                not_applicable: vec![],
            }],
        }
    }

    fn set(state: &mut ChecklistState, id: &str, status: ControlStatus) {
        state.controls.insert(
            id.into(),
            ControlState {
                status,
                notes: String::new(),
                last_modified: Some(Timestamp::now()),
            },
        );
    }

    #[test]
    fn test_fresh_state_stats() {
        let stats = compute_stats(&catalog(), &ChecklistState::default());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.reviewed, 0);
        assert_eq!(stats.applicable, 4);
        assert_eq!(stats.compliance_percent, 0);
        assert_eq!(stats.by_severity.len(), 4);
        assert_eq!(stats.by_severity[0].severity, Severity::Critical);
    }

    #[test]
    fn test_mixed_review_scenario() {
        // Four controls, severities [critical, high, medium, low];
        // control 1 compliant, control 2 not-applicable.
        let mut state = ChecklistState::default();
        set(&mut state, "c1", ControlStatus::Compliant);
        set(&mut state, "c2", ControlStatus::NotApplicable);

        let stats = compute_stats(&catalog(), &state);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.reviewed, 2);
        assert_eq!(stats.compliant, 1);
        assert_eq!(stats.non_compliant, 0);
        assert_eq!(stats.not_applicable, 1);
        assert_eq!(stats.applicable, 3);
        assert_eq!(stats.compliance_percent, 33);
    }

    #[test]
    fn test_all_not_applicable_avoids_division_by_zero() {
        let mut state = ChecklistState::default();
        for id in ["c1", "c2", "c3", "c4"] {
            set(&mut state, id, ControlStatus::NotApplicable);
        }
        let stats = compute_stats(&catalog(), &state);
        assert_eq!(stats.applicable, 0);
        assert_eq!(stats.compliance_percent, 0);
    }

    #[test]
    fn test_full_compliance_is_100() {
        let mut state = ChecklistState::default();
        for id in ["c1", "c2", "c3", "c4"] {
            set(&mut state, id, ControlStatus::Compliant);
        }
        let stats = compute_stats(&catalog(), &state);
        assert_eq!(stats.compliance_percent, 100);
    }

    #[test]
    fn test_by_severity_applicable() {
        let mut state = ChecklistState::default();
        set(&mut state, "c1", ControlStatus::NotApplicable);
        set(&mut state, "c2", ControlStatus::Compliant);
        let stats = compute_stats(&catalog(), &state);

        let critical = &stats.by_severity[0];
        assert_eq!(critical.total, 1);
        assert_eq!(critical.applicable, 0);
        assert_eq!(critical.compliant, 0);

        let high = &stats.by_severity[1];
        assert_eq!(high.total, 1);
        assert_eq!(high.applicable, 1);
        assert_eq!(high.compliant, 1);
    }

    #[test]
    fn test_category_stats_in_catalog_order() {
        let mut state = ChecklistState::default();
        set(&mut state, "c3", ControlStatus::Compliant);
        set(&mut state, "c4", ControlStatus::NonCompliant);

        let rows = compute_category_stats(&catalog(), &state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id.as_str(), "net");
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].reviewed, 0);
        assert_eq!(rows[1].id.as_str(), "app");
        assert_eq!(rows[1].reviewed, 2);
        assert_eq!(rows[1].compliant, 1);
    }

    #[test]
    fn test_percent_rounds() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = compute_stats(&catalog(), &ChecklistState::default());
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"compliancePercent\""));
        assert!(json.contains("\"bySeverity\""));
        assert!(json.contains("\"nonCompliant\""));
    }
}
