//! # Control Subcommands
//!
//! `status`, `notes`, and `show` — the per-control operations.

use anyhow::Result;
use clap::Args;

use clawcheck_core::{ControlId, ControlStatus};
use clawcheck_state::ChecklistStore;

/// Arguments for `clawcheck status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Control identifier.
    pub control: String,

    /// New status: unreviewed, compliant, non-compliant, or not-applicable.
    pub status: ControlStatus,
}

/// Arguments for `clawcheck notes`.
#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Control identifier.
    pub control: String,

    /// Notes text; pass an empty string to clear.
    pub notes: String,
}

/// Arguments for `clawcheck show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Control identifier; omit to list the whole checklist.
    pub control: Option<String>,
}

/// Set a control's review status.
pub fn run_status(store: &mut ChecklistStore, args: &StatusArgs) -> Result<()> {
    let id = ControlId::new(&args.control);
    if store.catalog().control(&id).is_none() {
        tracing::warn!(control = %id, "control is not in the catalog; recording anyway");
    }
    store.set_control_status(&id, args.status);
    println!("{} -> {}", id, args.status);
    Ok(())
}

/// Set a control's notes.
pub fn run_notes(store: &mut ChecklistStore, args: &NotesArgs) -> Result<()> {
    let id = ControlId::new(&args.control);
    store.set_control_notes(&id, args.notes.clone());
    println!("{}: notes updated", id);
    Ok(())
}

/// Print one control, or the whole checklist in catalog order.
pub fn run_show(store: &ChecklistStore, args: &ShowArgs) -> Result<()> {
    match &args.control {
        Some(raw) => {
            let id = ControlId::new(raw);
            let state = store.control_state(&id);
            match store.catalog().control(&id) {
                Some(record) => {
                    println!("{} — {}", record.id, record.title);
                    println!("  severity: {}", record.severity);
                    println!("  config:   {}", record.config_path);
                    print_state_lines(&state);
                }
                None => {
                    println!("{} (not in catalog)", id);
                    print_state_lines(&state);
                }
            }
        }
        None => {
            for record in &store.catalog().controls {
                let state = store.control_state(&record.id);
                println!(
                    "{:<14} {:<24} {} — {}",
                    format!("[{}]", state.status),
                    record.id,
                    record.severity,
                    record.title
                );
            }
        }
    }
    Ok(())
}

fn print_state_lines(state: &clawcheck_state::ControlState) {
    println!("  status:   {}", state.status);
    if !state.notes.is_empty() {
        println!("  notes:    {}", state.notes);
    }
    match &state.last_modified {
        Some(ts) => println!("  modified: {ts}"),
        None => println!("  modified: never"),
    }
}
