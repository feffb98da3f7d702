//! # Export Subcommand
//!
//! Writes the export document (pretty-printed JSON) to a file or stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use clawcheck_state::ChecklistStore;

/// Arguments for `clawcheck export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; omit to print to stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Write the export snapshot.
pub fn run_export(store: &ChecklistStore, args: &ExportArgs) -> Result<()> {
    let doc = store.export_state();
    let json = doc.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("writing export to {}", path.display()))?;
            println!(
                "exported {} controls to {}",
                doc.summary.total,
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
