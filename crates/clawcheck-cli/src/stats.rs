//! # Stats Subcommand
//!
//! Prints the derived statistics: overall counts, the per-severity
//! breakdown, and the per-category rows. `--json` emits the machine form.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use clawcheck_state::ChecklistStore;

/// Arguments for `clawcheck stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Emit JSON instead of the human-readable table.
    #[arg(long)]
    pub json: bool,
}

/// Print statistics for the current state.
pub fn run_stats(store: &ChecklistStore, args: &StatsArgs) -> Result<()> {
    let stats = store.stats();
    let categories = store.category_stats();

    if args.json {
        let doc = json!({
            "stats": stats,
            "categories": categories,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("profile: {}", store.state().profile);
    println!(
        "controls: {} total, {} reviewed, {} compliant, {} non-compliant, {} not-applicable",
        stats.total, stats.reviewed, stats.compliant, stats.non_compliant, stats.not_applicable
    );
    println!(
        "compliance: {}% of {} applicable",
        stats.compliance_percent, stats.applicable
    );

    println!();
    println!("by severity:");
    for row in &stats.by_severity {
        println!(
            "  {:<8} {:>3} total  {:>3} compliant  {:>3} applicable",
            row.severity, row.total, row.compliant, row.applicable
        );
    }

    println!();
    println!("by category:");
    for row in &categories {
        println!(
            "  {:<24} {:>3} total  {:>3} reviewed  {:>3} compliant",
            row.title, row.total, row.reviewed, row.compliant
        );
    }
    Ok(())
}
