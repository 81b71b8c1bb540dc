//! nav-migrate - Main Entry Point
//!
//! Runs the header migration over a site tree and prints a per-file report.
//! The actual implementation is in the `nav_migrate` library.

use anyhow::Result;
use clap::Parser;
use nav_migrate::logging::init_logging;
use nav_migrate::report::{format_summary, print_record};
use nav_migrate::{GitOps, MigrationConfig, Migrator, RunSummary};
use std::path::PathBuf;
use tracing::warn;

/// Replace inline site headers with a placeholder filled by nav-loader.js
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Site root to migrate
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report what would change without writing any file
    #[arg(long)]
    dry_run: bool,

    /// TOML file overriding the built-in file names and markers
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Commit the updated files to the git repository containing the root
    #[arg(long)]
    commit: bool,
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MigrationConfig::load(path)?,
        None => MigrationConfig::default(),
    };

    let migrator = Migrator::new(&args.root, config)?.with_dry_run(args.dry_run);
    let summary = migrator.run_with(|record| print_record(record, migrator.root(), args.dry_run));

    println!();
    println!("{}", format_summary(&summary));

    if args.commit {
        commit_updates(&migrator, &summary)?;
    }

    // Read and write failures leave pages unmigrated; signal that to scripts
    if summary.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn commit_updates(migrator: &Migrator, summary: &RunSummary) -> Result<()> {
    if migrator.is_dry_run() {
        warn!("--commit has no effect together with --dry-run");
        return Ok(());
    }

    let git_ops = GitOps::new(migrator.root());
    if !git_ops.is_git_managed() {
        warn!(root = %migrator.root().display(), "Not a git repository, nothing committed");
        return Ok(());
    }

    let updated = summary.updated_paths();
    let message = format!("Load site header from shared navigation ({} pages)", updated.len());
    match git_ops.commit(&updated, &message)? {
        Some(oid) => println!("Committed {} files as {}", updated.len(), oid),
        None => println!("No updated files to commit"),
    }
    Ok(())
}
