//! # clawcheck CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

use clawcheck_cli::{control, export, profile, reset, stats};

/// Security-compliance checklist for OpenClaw deployments.
///
/// Tracks per-control review status and notes, applies deployment
/// profiles, and derives compliance statistics. State persists in a
/// single local JSON slot.
#[derive(Parser, Debug)]
#[command(name = "clawcheck", version, about)]
struct Cli {
    /// Path to the control catalog (YAML or JSON).
    #[arg(long, env = "CLAWCHECK_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding the persisted state slot. Defaults to the
    /// platform data directory.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Set a control's review status.
    Status(control::StatusArgs),
    /// Set a control's notes.
    Notes(control::NotesArgs),
    /// Print one control's state, or the whole checklist.
    Show(control::ShowArgs),
    /// Apply a deployment profile.
    Profile(profile::ProfileArgs),
    /// Overall, per-severity, and per-category statistics.
    Stats(stats::StatsArgs),
    /// Write the export document.
    Export(export::ExportArgs),
    /// Replace state with defaults.
    Reset(reset::ResetArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = cli
        .catalog
        .ok_or_else(|| anyhow::anyhow!("--catalog (or CLAWCHECK_CATALOG) is required"))?;
    let mut store = clawcheck_cli::open_store(&catalog, cli.state_dir.as_deref())?;

    match cli.command {
        Commands::Status(args) => control::run_status(&mut store, &args),
        Commands::Notes(args) => control::run_notes(&mut store, &args),
        Commands::Show(args) => control::run_show(&store, &args),
        Commands::Profile(args) => profile::run_profile(&mut store, &args),
        Commands::Stats(args) => stats::run_stats(&store, &args),
        Commands::Export(args) => export::run_export(&store, &args),
        Commands::Reset(args) => reset::run_reset(&mut store, &args),
    }
}
