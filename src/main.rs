mod config;
mod patch;
mod report;

use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// fetch-patcher — injects useEffect data-fetching boilerplate into the
/// admin page components listed in its page table.
///
/// By default nothing is written back: the run reports which pages would
/// change. Pass --write to persist the import rewrite.
#[derive(Parser, Debug)]
#[command(name = "fetch-patcher", version, about)]
struct Cli {
    /// Page table to use instead of the built-in one
    /// (or .fetch-patcher.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the import rewrite back to disk
    #[arg(long)]
    write: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading page table");
    let config = config::Config::load(cli.config.as_deref())?;
    debug!(pages = config.pages.len(), write = cli.write, "page table loaded");

    report::print_banner();

    let mut summary = report::RunSummary::default();
    for page in &config.pages {
        // A read failure aborts the run here; later pages are not attempted.
        let outcome = patch::patch_file(&page.path, page, cli.write)?;
        report::print_status(&page.path, outcome);
        summary.record(outcome);
    }

    report::print_summary(summary);
    info!(changed = summary.changed, skipped = summary.skipped, "done");

    Ok(())
}
