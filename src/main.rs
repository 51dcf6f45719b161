mod config;
mod engine;
mod model;
mod report;
mod stats;

use crate::config::Config;
use crate::engine::Engine;
use crate::report::Reporter;
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Switch to the door proposed by the presenter.
    #[arg(long)]
    switch: bool,

    /// Number of runs to perform.
    #[arg(long, default_value_t = 20)]
    runs: usize,

    /// Number of doors.
    #[arg(long, default_value_t = 3)]
    doors: usize,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        println!("Error: {error:#}. Exiting.");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    if !report::TABLE_AVAILABLE {
        log::warn!("tabular output capability not compiled in; per-trial details will be omitted");
    }

    let cfg = Config::new(args.runs, args.doors, args.switch).context("failed to construct cfg")?;

    let mut engine = Engine::from_os_rng(cfg).context("failed to construct engine")?;
    let result = engine.run_simulation().context("failed to run simulation")?;

    Reporter::new(&result)
        .print()
        .context("failed to print report")?;

    Ok(())
}
