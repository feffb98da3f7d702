//! # clawcheck-catalog — The Read-Only Control Catalog
//!
//! Models the external input dataset of the checklist engine: the ordered
//! catalog of control records, categories, and deployment profiles. The
//! catalog is immutable for the duration of a session; the state crate
//! reads it but never mutates it.
//!
//! ## Modules
//!
//! - **model** (`model.rs`): `ControlRecord`, `Category`, `Profile`, and the
//!   `Catalog` aggregate with ordered lookups and YAML/JSON loading.
//! - **validate** (`validate.rs`): referential-integrity validation — every
//!   control's category must exist, every profile's not-applicable entry
//!   must name a cataloged control, identifiers must be unique.
//!
//! ## Design
//!
//! Catalog order is significant: export documents and category statistics
//! present controls and categories in the order the catalog declares them,
//! so the aggregate keeps plain `Vec`s rather than maps.

pub mod model;
pub mod validate;

pub use model::{Catalog, Category, ControlRecord, Profile};
