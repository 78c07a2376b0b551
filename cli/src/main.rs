//! arcs-overlay: Arcs stream overlay command line interface
//!
//! Converts game-state exports into overlay game data.

use anyhow::{Context, Result};
use arcs_overlay::{process_exports, OutputFormat, ProcessOptions};
use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;

/// Arcs overlay CLI
///
/// Converts game-state exports from the table into the game data shape the
/// stream overlay renders.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Game export JSON file (repeat for several)
    #[arg(short, long = "input", value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (only with a single input)
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory for output files (default: next to each input)
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::GameData)]
    format: OutputFormat,

    /// Broadcaster channel id (required for --format broadcast)
    #[arg(long = "channel-id", value_name = "ID")]
    channel_id: Option<String>,

    /// Write single-line JSON
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of worker threads when converting several exports
    #[arg(short = 'j', long, default_value_t = 1, value_name = "N")]
    threads: usize,

    /// Dry run - parse and transform but don't write output
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity level
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("arcs-overlay v{}", env!("CARGO_PKG_VERSION"));
    debug!("Inputs: {:?}", args.inputs);
    debug!("Output: {:?}", args.output);
    debug!("Output dir: {:?}", args.output_dir);
    debug!("Format: {:?}", args.format);
    debug!("Threads: {}", args.threads);

    // Validate input files exist
    for input in &args.inputs {
        if !input.exists() {
            error!("Input file not found: {:?}", input);
            anyhow::bail!("Input file not found: {:?}", input);
        }
    }

    if let Some(dir) = &args.output_dir {
        if !dir.is_dir() {
            error!("Output directory not found: {:?}", dir);
            anyhow::bail!("Output directory not found: {:?}", dir);
        }
    }

    let options = ProcessOptions {
        output: args.output,
        output_dir: args.output_dir,
        format: args.format,
        channel_id: args.channel_id,
        compact: args.compact,
        threads: args.threads,
        dry_run: args.dry_run,
    };

    let stats = process_exports(&args.inputs, &options).context("Failed to process exports")?;

    info!(
        "Processed {} exports: {} players, {} court agents",
        stats.exports_processed, stats.players_projected, stats.court_agents
    );

    if args.dry_run {
        info!("Dry run complete - no output written");
    }

    if stats.errors > 0 {
        error!("{} exports had errors", stats.errors);
        anyhow::bail!("{} of {} exports failed", stats.errors, args.inputs.len());
    }

    Ok(())
}
