//! mutascope - Nucleotide Sequence Analysis
//!
//! ## Usage
//!
//! ```bash
//! mutascope analyze <sequence_file>
//! mutascope analyze --sequence ATGAAATAA
//! mutascope compare <pair.fasta>            # first two records
//! mutascope compare <ref.fa> <alt.fa>       # first record of each file
//! mutascope compare --seq1 ATCG --seq2 ATTG
//! ```
//!
//! Output goes to stdout as text unless `--format json` or `-o <file>` is given.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use mutascope::config::{AnalysisConfig, DEFAULT_MAX_ALIGN_LEN};
use mutascope::fasta::{parse_sequence_input, read_sequence_file};
use mutascope::model::Record;
use mutascope::orf::DEFAULT_MIN_ORF_LEN;
use mutascope::report::{render_analyses, render_comparison, NamedAnalysis, NamedComparison, OutputFormat};
use mutascope::Analyzer;

/// Output format for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable report
    Text,
    /// JSON (camelCase fields)
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// mutascope - DNA composition, ORFs, translation and mutation profiling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", global = true, default_value = "-")]
    output: String,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, global = true, default_value = "text")]
    format: FormatArg,

    /// Log filter (e.g. "debug", "mutascope=trace"); falls back to RUST_LOG, then "warn"
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,

    #[command(flatten)]
    settings: Settings,
}

/// Analysis settings shared by all subcommands
#[derive(Args, Debug)]
struct Settings {
    /// Minimum ORF length in nucleotides
    #[arg(long = "min-orf-len", global = true, default_value_t = DEFAULT_MIN_ORF_LEN)]
    min_orf_len: usize,

    /// Longest sequence (per side) accepted for alignment
    #[arg(long = "max-align-len", global = true, default_value_t = DEFAULT_MAX_ALIGN_LEN)]
    max_align_len: usize,

    /// Report full composition stats for both sequences of a comparison
    #[arg(long = "full-stats", global = true)]
    full_stats: bool,
}

impl From<&Settings> for AnalysisConfig {
    fn from(settings: &Settings) -> Self {
        AnalysisConfig {
            min_orf_len: settings.min_orf_len,
            max_align_len: settings.max_align_len,
            full_stats: settings.full_stats,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composition, ORFs and translation of every input sequence
    Analyze {
        /// FASTA or bare sequence file
        #[arg(required_unless_present = "sequence", conflicts_with = "sequence")]
        file: Option<PathBuf>,

        /// Literal sequence instead of a file
        #[arg(short = 's', long = "sequence")]
        sequence: Option<String>,
    },
    /// Align two sequences and list point mutations
    Compare {
        /// FASTA file with two records, or the first of two files
        #[arg(required_unless_present_all = ["seq1", "seq2"], conflicts_with_all = ["seq1", "seq2"])]
        file: Option<PathBuf>,

        /// Second file (its first record is used)
        file2: Option<PathBuf>,

        /// First literal sequence
        #[arg(long = "seq1", requires = "seq2")]
        seq1: Option<String>,

        /// Second literal sequence
        #[arg(long = "seq2", requires = "seq1")]
        seq2: Option<String>,
    },
}

/// Initializes tracing on stderr.
fn init_tracing(level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", level, e))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}

/// Loads records from a file, or wraps a literal sequence.
fn load_records(file: Option<&PathBuf>, literal: Option<&str>, literal_id: &str) -> Result<Vec<Record>> {
    match (file, literal) {
        (_, Some(sequence)) => Ok(parse_sequence_input(sequence, literal_id)?),
        (Some(path), None) => {
            let records = read_sequence_file(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            info!("Loaded {} sequences from {}", records.len(), path.display());
            Ok(records)
        }
        (None, None) => anyhow::bail!("No input sequence given"),
    }
}

/// Picks the two records to compare.
fn comparison_pair(command: &Command) -> Result<(Record, Record)> {
    let Command::Compare { file, file2, seq1, seq2 } = command else {
        anyhow::bail!("Not a comparison command");
    };

    if let (Some(s1), Some(s2)) = (seq1, seq2) {
        let first = first_record(load_records(None, Some(s1.as_str()), "seq1")?)?;
        let second = first_record(load_records(None, Some(s2.as_str()), "seq2")?)?;
        return Ok((first, second));
    }

    let mut records = load_records(file.as_ref(), None, "seq1")?;
    match file2 {
        Some(path) => {
            let first = first_record(records)?;
            let second = first_record(load_records(Some(path), None, "seq2")?)?;
            Ok((first, second))
        }
        None => {
            if records.len() < 2 {
                anyhow::bail!(
                    "Comparison needs two sequences, found {} in the input",
                    records.len()
                );
            }
            if records.len() > 2 {
                info!("Using the first two of {} sequences", records.len());
            }
            records.truncate(2);
            let second = records.pop().context("missing second sequence")?;
            let first = records.pop().context("missing first sequence")?;
            Ok((first, second))
        }
    }
}

fn first_record(records: Vec<Record>) -> Result<Record> {
    records.into_iter().next().context("Input contains no sequence")
}

/// Writes the report to a file or stdout.
fn write_output(output: &str, report: &str) -> Result<()> {
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", report)?;
    } else {
        let mut file = std::fs::File::create(output)
            .with_context(|| format!("Failed to create {}", output))?;
        writeln!(file, "{}", report)?;
        eprintln!("Wrote report to {}", output);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let analyzer = Analyzer::new(AnalysisConfig::from(&cli.settings));
    let format: OutputFormat = cli.format.into();

    let report = match &cli.command {
        Command::Analyze { file, sequence } => {
            let records = load_records(file.as_ref(), sequence.as_deref(), "sequence")?;

            let mut results = Vec::with_capacity(records.len());
            for record in &records {
                let stats = analyzer
                    .analyze(&record.data)
                    .with_context(|| format!("Sequence '{}'", record.id))?;
                results.push(stats);
            }

            let named: Vec<NamedAnalysis<'_>> = records
                .iter()
                .zip(&results)
                .map(|(record, stats)| NamedAnalysis { id: &record.id, stats })
                .collect();
            render_analyses(&named, format)?
        }
        Command::Compare { .. } => {
            let (first, second) = comparison_pair(&cli.command)?;
            let result = analyzer
                .compare(&first.data, &second.data)
                .with_context(|| format!("Comparing '{}' with '{}'", first.id, second.id))?;

            render_comparison(
                &NamedComparison {
                    seq1_id: &first.id,
                    seq2_id: &second.id,
                    result: &result,
                },
                format,
            )?
        }
    };

    write_output(&cli.output, &report)
}
