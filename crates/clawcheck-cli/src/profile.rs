//! # Profile Subcommand
//!
//! Applies a deployment profile, listing the not-applicable presets it
//! forces. The store's tolerant no-op on unknown profiles is surfaced as an
//! error here — a typo at the command line should not silently do nothing.

use anyhow::{bail, Result};
use clap::Args;

use clawcheck_core::ProfileId;
use clawcheck_state::ChecklistStore;

/// Arguments for `clawcheck profile`.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile identifier; omit to list available profiles.
    pub profile: Option<String>,
}

/// Apply a profile, or list the catalog's profiles.
pub fn run_profile(store: &mut ChecklistStore, args: &ProfileArgs) -> Result<()> {
    let Some(raw) = &args.profile else {
        for profile in &store.catalog().profiles {
            let marker = if profile.id == store.state().profile {
                "*"
            } else {
                " "
            };
            println!(
                "{marker} {:<16} {} ({} not-applicable preset{})",
                profile.id,
                profile.title,
                profile.not_applicable.len(),
                if profile.not_applicable.len() == 1 { "" } else { "s" }
            );
        }
        return Ok(());
    };

    let id = ProfileId::new(raw);
    let Some(profile) = store.catalog().profile(&id) else {
        bail!("unknown profile {raw:?}; run `clawcheck profile` to list profiles");
    };
    let presets = profile.not_applicable.clone();
    let title = profile.title.clone();

    store.apply_profile(&id);

    println!("applied profile {id} ({title})");
    for preset in presets {
        println!("  not-applicable: {preset}");
    }
    Ok(())
}
