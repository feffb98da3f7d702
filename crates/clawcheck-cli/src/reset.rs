//! # Reset Subcommand
//!
//! Replaces the persisted aggregate with defaults. The store itself resets
//! without ceremony; the confirmation gate lives here, at the UI layer.

use anyhow::{bail, Result};
use clap::Args;

use clawcheck_state::ChecklistStore;

/// Arguments for `clawcheck reset`.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Actually perform the reset.
    #[arg(long)]
    pub force: bool,
}

/// Reset all checklist state to defaults.
pub fn run_reset(store: &mut ChecklistStore, args: &ResetArgs) -> Result<()> {
    if !args.force {
        bail!(
            "this discards every status and note ({} control record{}); re-run with --force",
            store.state().controls.len(),
            if store.state().controls.len() == 1 { "" } else { "s" }
        );
    }
    store.reset_all();
    println!("checklist state reset to defaults");
    Ok(())
}
