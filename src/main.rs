#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use json_file_merge::{cli::Cli, merge::ArrayMergeStrategy, merge_files::merge_files};
use tracing::{debug, error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    initialize_tracing(cli.debug, cli.trace);

    // All failures funnel through this one reporting channel
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let strategy = cli
        .array_merge_strategy
        .as_deref()
        .map_or_else(ArrayMergeStrategy::default, ArrayMergeStrategy::from_input);

    debug!("base_file: {}", cli.base_file.display());
    debug!("merge_file: {}", cli.merge_file.display());
    debug!("output_file: {}", cli.output_file.display());
    debug!("array_merge_strategy: {strategy:?}");

    merge_files(&cli.base_file, &cli.merge_file, &cli.output_file, strategy)
        .context("Failed to merge JSON files")?;

    println!("Output written to: {}", cli.output_file.display());
    Ok(())
}

/// Initialize tracing with the specified debug/trace flags
fn initialize_tracing(debug: bool, trace: bool) {
    let log_level = if trace {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy())
        .init();
}
