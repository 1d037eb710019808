//! fapiao2tsv - Extract VAT invoice line items to TSV
//!
//! A command line tool that reads text-content dumps of invoice PDFs and
//! writes one line per line item, tagged with the document's invoice
//! number, as tab-separated values or JSON.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use fapiao_core::api::{JsonFileSource, write_tsv};
use fapiao_core::layout::params::{
    DEFAULT_ALIGN_TOLERANCE, DEFAULT_BLOCK_GAP_TOLERANCE, DEFAULT_MEANINGFUL_SPACE_TOLERANCE,
    DEFAULT_MEANINGFUL_SPACE_WIDTH, DEFAULT_ROW_HEIGHT_RATIO,
};
use fapiao_core::{BatchEntry, BatchOptions, ClassifierStrategy, ExtractParams, extract_batch};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Output type for the extracted line items.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Tab-separated values, one line per line item (default)
    #[default]
    Tsv,
    /// JSON array with one object per input file, in input order
    Json,
}

/// Column classification strategy.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Strategy {
    /// Classify by the observed content span of each column
    #[default]
    ContentSpan,
    /// Classify by header label bounds only
    FixedBounds,
}

impl From<Strategy> for ClassifierStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::ContentSpan => ClassifierStrategy::ContentSpan,
            Strategy::FixedBounds => ClassifierStrategy::FixedBounds,
        }
    }
}

/// Extract line items from invoice text-content dumps.
#[derive(Parser, Debug)]
#[command(name = "fapiao2tsv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to text-content JSON files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    // === Layout options ===
    /// Row tolerance relative to fragment height
    #[arg(long = "row-height-ratio", default_value_t = DEFAULT_ROW_HEIGHT_RATIO)]
    row_height_ratio: f64,

    /// Maximum gap between fragments merged into one block
    #[arg(long = "block-gap", default_value_t = DEFAULT_BLOCK_GAP_TOLERANCE)]
    block_gap: f64,

    /// Width of a word-separating space glyph
    #[arg(long = "space-width", default_value_t = DEFAULT_MEANINGFUL_SPACE_WIDTH)]
    space_width: f64,

    /// Tolerance on the word-separating space width
    #[arg(long = "space-tolerance", default_value_t = DEFAULT_MEANINGFUL_SPACE_TOLERANCE)]
    space_tolerance: f64,

    /// Alignment tolerance against header labels
    #[arg(long = "align-tolerance", default_value_t = DEFAULT_ALIGN_TOLERANCE)]
    align_tolerance: f64,

    /// Column classification strategy
    #[arg(long, value_enum, default_value = "content-span")]
    strategy: Strategy,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "tsv")]
    output_type: OutputType,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn build_params(args: &Args) -> ExtractParams {
    ExtractParams {
        row_height_ratio: args.row_height_ratio,
        block_gap_tolerance: args.block_gap,
        meaningful_space_width: args.space_width,
        meaningful_space_tolerance: args.space_tolerance,
        align_tolerance: args.align_tolerance,
        ..ExtractParams::default()
    }
    .with_strategy(args.strategy.into())
}

fn write_output<W: Write>(
    output: &mut W,
    output_type: OutputType,
    entries: &[BatchEntry],
) -> Result<()> {
    match output_type {
        OutputType::Tsv => {
            let documents: Vec<_> = entries
                .iter()
                .filter_map(|entry| entry.result.as_ref().ok().cloned())
                .collect();
            write_tsv(&mut *output, &documents)?;
        }
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *output, entries)?;
            writeln!(output)?;
        }
    }
    output.flush()?;
    Ok(())
}

fn open_output(outfile: &str) -> Result<Box<dyn Write>> {
    if outfile == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(outfile)
        .with_context(|| format!("Failed to create output file {outfile}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn run(args: &Args) -> Result<bool> {
    let sources: Vec<JsonFileSource> = args.files.iter().map(JsonFileSource::new).collect();
    let options = BatchOptions {
        threads: args.threads,
    };
    let entries = extract_batch(&sources, &build_params(args), &options)?;

    let mut failed = false;
    for entry in &entries {
        if let Err(e) = &entry.result {
            eprintln!("Error processing {}: {}", entry.name, e);
            failed = true;
        }
    }

    let mut output = open_output(&args.outfile)?;
    write_output(&mut output, args.output_type, &entries)?;
    Ok(!failed)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
