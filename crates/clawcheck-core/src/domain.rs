//! # Severity and Review Status — Single Source of Truth
//!
//! Defines the `Severity` tiers and the `ControlStatus` review states. These
//! are the ONE definition each used across the workspace. Every `match` must
//! be exhaustive — adding a status forces every consumer to handle it at
//! compile time.
//!
//! The severity breakdown in statistics iterates `Severity::ALL` in the fixed
//! order `critical, high, medium, low`; consumers must not re-derive their
//! own ordering.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ClawcheckError;

/// Priority tier of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Exploitable with severe impact; review first.
    Critical,
    /// Significant hardening gap.
    High,
    /// Defense-in-depth measure.
    Medium,
    /// Hygiene or informational.
    Low,
}

/// Total number of severity tiers. Used for compile-time assertions.
pub const SEVERITY_COUNT: usize = 4;

impl Severity {
    /// All severity tiers in the canonical reporting order.
    pub const ALL: [Severity; SEVERITY_COUNT] =
        [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// The lowercase wire name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ClawcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(ClawcheckError::Catalog(format!(
                "unknown severity: {other:?}"
            ))),
        }
    }
}

/// Review status of a control.
///
/// `Unreviewed` is the default for any control without a stored record — an
/// absent record and an explicit `Unreviewed` record are equivalent for
/// statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlStatus {
    /// Not yet looked at.
    #[default]
    Unreviewed,
    /// Reviewed and the deployment satisfies the control.
    Compliant,
    /// Reviewed and the deployment violates the control.
    NonCompliant,
    /// The control does not apply to this deployment.
    NotApplicable,
}

impl ControlStatus {
    /// Whether the control has been looked at (any status but `Unreviewed`).
    pub fn is_reviewed(&self) -> bool {
        !matches!(self, Self::Unreviewed)
    }

    /// The kebab-case wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unreviewed => "unreviewed",
            Self::Compliant => "compliant",
            Self::NonCompliant => "non-compliant",
            Self::NotApplicable => "not-applicable",
        }
    }
}

impl std::fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlStatus {
    type Err = ClawcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unreviewed" => Ok(Self::Unreviewed),
            "compliant" => Ok(Self::Compliant),
            "non-compliant" => Ok(Self::NonCompliant),
            "not-applicable" => Ok(Self::NotApplicable),
            other => Err(ClawcheckError::Catalog(format!(
                "unknown control status: {other:?}"
            ))),
        }
    }
}
