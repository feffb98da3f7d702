//! # clawcheck-core — Foundational Types for the Checklist Engine
//!
//! Defines the primitive vocabulary shared by every other crate in the
//! workspace: identifier newtypes, the severity and review-status enums,
//! UTC-only timestamps, and the error hierarchy. Every other crate depends
//! on `clawcheck-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `ControlId`, `CategoryId`,
//!    `ProfileId` — you cannot pass a category identifier where a control
//!    identifier is expected. No bare strings for identifiers.
//!
//! 2. **Single `Severity` and `ControlStatus` enums.** One definition each,
//!    exhaustive `match` everywhere, fixed iteration order for the severity
//!    breakdown in statistics.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix at
//!    seconds precision, so persisted state serializes identically across
//!    platforms and runs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `clawcheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use domain::{ControlStatus, Severity, SEVERITY_COUNT};
pub use error::ClawcheckError;
pub use identity::{CategoryId, ControlId, ProfileId};
pub use temporal::Timestamp;
