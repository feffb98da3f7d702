//! # clawcheck-state — The Checklist State Store
//!
//! Owns the persisted checklist aggregate and exposes every operation the
//! engine supports: per-control status and notes mutation, profile
//! application, reset, export, and the derived statistics views.
//!
//! ## Modules
//!
//! - **state** (`state.rs`): the persisted shapes — `ControlState` and the
//!   `ChecklistState` aggregate, wire-compatible with the document the
//!   documentation site's checklist widget keeps in browser storage.
//! - **storage** (`storage.rs`): the `StateStorage` seam with file-backed
//!   and in-memory backends. One durable slot, merge-with-defaults on load.
//! - **store** (`store.rs`): `ChecklistStore`, the single mutating owner of
//!   the aggregate.
//! - **stats** (`stats.rs`): pure derived views over `(catalog, state)`.
//! - **export** (`export.rs`): the self-describing export snapshot.
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous. Every mutation persists the whole
//! aggregate before returning; there is exactly one writer per store
//! instance. Two processes sharing a storage slot are last-write-wins — an
//! accepted limitation, not a consistency guarantee.

pub mod export;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;

pub use export::{ExportDocument, ExportSummary, ExportedControl};
pub use state::{ChecklistState, ControlState, STATE_VERSION};
pub use stats::{CategoryStats, SeverityStats, Stats};
pub use storage::{FileStorage, MemoryStorage, StateStorage, STORAGE_NAMESPACE};
pub use store::ChecklistStore;
