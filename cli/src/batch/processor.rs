//! Batch processor for game exports
//!
//! Reads export files, runs the transformer on each one and writes the
//! resulting game data (or its broadcast envelope) next to the input or into
//! an output directory.

use crate::error::{CliError, CliResult};
use arcs_overlay_core::{transform, BroadcastPayload, GameData, RawExport};
use log::{debug, error, info};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// What gets written for each export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Overlay game data JSON
    #[default]
    GameData,
    /// Pub/sub request body with compressed game data
    Broadcast,
}

impl OutputFormat {
    /// File name suffix for outputs derived from an input name
    fn suffix(self) -> &'static str {
        match self {
            OutputFormat::GameData => "gamedata.json",
            OutputFormat::Broadcast => "pubsub.json",
        }
    }
}

/// Options controlling a processing run
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Explicit output file (single input only)
    pub output: Option<PathBuf>,
    /// Directory for derived output files (default: next to each input)
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    /// Broadcaster id for [`OutputFormat::Broadcast`]
    pub channel_id: Option<String>,
    /// Single-line JSON instead of pretty-printed
    pub compact: bool,
    /// Worker threads; 1 processes exports sequentially
    pub threads: usize,
    /// Parse and transform without writing anything
    pub dry_run: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            output: None,
            output_dir: None,
            format: OutputFormat::GameData,
            channel_id: None,
            compact: false,
            threads: 1,
            dry_run: false,
        }
    }
}

/// Statistics from batch processing
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub exports_processed: usize,
    pub players_projected: usize,
    pub court_agents: usize,
    pub errors: usize,
}

/// Outcome of a single export
#[derive(Debug)]
struct ExportSummary {
    players: usize,
    court_agents: usize,
    output: PathBuf,
}

/// Process every export, continuing past failures
///
/// # Arguments
///
/// * `inputs` - Export files to convert
/// * `options` - Output location, format and worker settings
///
/// # Returns
///
/// Processing statistics. A file that fails is logged and counted in
/// `errors`. Option errors, including two inputs mapping to the same output
/// file, abort before any file is read.
pub fn process_exports(inputs: &[PathBuf], options: &ProcessOptions) -> CliResult<ProcessingStats> {
    if options.output.is_some() && inputs.len() > 1 {
        return Err(CliError::AmbiguousOutput(inputs.len()));
    }
    if options.format == OutputFormat::Broadcast && options.channel_id.is_none() {
        return Err(CliError::MissingChannelId);
    }

    let outputs = planned_outputs(inputs, options)?;

    let threads = options.threads.max(1);
    info!("Processing {} exports with {} worker(s)", inputs.len(), threads);

    let results: Vec<CliResult<ExportSummary>> = if threads == 1 || inputs.len() < 2 {
        inputs
            .iter()
            .zip(&outputs)
            .map(|(input, output)| process_export(input, output, options))
            .collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;
        pool.install(|| {
            inputs
                .par_iter()
                .zip(outputs.par_iter())
                .map(|(input, output)| process_export(input, output, options))
                .collect()
        })
    };

    let mut stats = ProcessingStats::default();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(summary) => {
                stats.exports_processed += 1;
                stats.players_projected += summary.players;
                stats.court_agents += summary.court_agents;
                debug!("{:?} -> {:?}", input, summary.output);
            }
            Err(e) => {
                stats.errors += 1;
                error!("{:?}: {}", input, e);
            }
        }
    }

    Ok(stats)
}

/// Output path for every input, rejecting runs where two inputs would
/// write the same file
fn planned_outputs(inputs: &[PathBuf], options: &ProcessOptions) -> CliResult<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = output_path_for(input, options)?;
        if let Some(first) = claimed.insert(output.clone(), input) {
            return Err(CliError::DuplicateOutput {
                output,
                first: first.to_path_buf(),
                second: input.clone(),
            });
        }
        outputs.push(output);
    }

    Ok(outputs)
}

/// Convert one export file
fn process_export(
    input: &Path,
    output: &Path,
    options: &ProcessOptions,
) -> CliResult<ExportSummary> {
    info!("Reading export: {:?}", input);
    let raw = read_export(input)?;
    let game_data = transform(&raw);

    let players = raw.player_count();
    let court_agents = game_data
        .general_data
        .court_cards
        .iter()
        .map(|card| card.agents.len())
        .sum();
    debug!(
        "{:?}: {} players, {} court agents",
        input, players, court_agents
    );

    let rendered = render(&game_data, options)?;

    if options.dry_run {
        debug!("Dry run: skipping write of {:?}", output);
    } else {
        info!("Writing output to {:?}", output);
        write_output(output, &rendered)?;
    }

    Ok(ExportSummary {
        players,
        court_agents,
        output: output.to_path_buf(),
    })
}

/// Read and parse an export file
fn read_export(path: &Path) -> CliResult<RawExport> {
    let file = File::open(path)?;
    Ok(RawExport::from_reader(BufReader::new(file))?)
}

/// Serialize game data in the requested format
fn render(game_data: &GameData, options: &ProcessOptions) -> CliResult<String> {
    match options.format {
        OutputFormat::GameData => to_json(game_data, options.compact),
        OutputFormat::Broadcast => {
            let channel_id = options
                .channel_id
                .as_deref()
                .ok_or(CliError::MissingChannelId)?;
            let payload = BroadcastPayload::new(channel_id, game_data)?;
            to_json(&payload, options.compact)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> CliResult<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

/// Output path for an input: the explicit `--output`, or
/// `<dir>/<input stem>.<suffix>` where `<dir>` is `--output-dir` or the
/// input's own directory.
pub fn output_path_for(input: &Path, options: &ProcessOptions) -> CliResult<PathBuf> {
    if let Some(output) = &options.output {
        return Ok(output.clone());
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CliError::InvalidPath(input.to_path_buf()))?;
    let file_name = format!("{}.{}", stem, options.format.suffix());

    let dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    Ok(dir.join(file_name))
}

/// Write rendered output, with a trailing newline
fn write_output(path: &Path, contents: &str) -> CliResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", contents)?;
    writer.flush()?;
    Ok(())
}
