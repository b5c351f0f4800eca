//! Command-line front end for batch generation.
//!
//! The binary delegates to [`run`] and [`render_json_lines`] so argument
//! handling and output can be exercised in tests without spawning a process.
//! Every flag can also be supplied through an `IDENTITY_FORGE_*` environment
//! variable.

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::error::SynthesisError;
use crate::paging::{IndexRange, PagePlan};
use crate::record::Record;
use crate::region::Region;
use crate::seed::RunSeed;
use crate::synthesizer::{Batch, RecordSynthesizer};

/// `identity-forge` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "identity-forge",
    about = "Generate reproducible regional fake identities with optional typos",
    version
)]
pub struct CliArgs {
    /// Run seed. A random seed is chosen (and logged) when omitted.
    #[arg(long, env = "IDENTITY_FORGE_SEED", value_name = "seed")]
    pub seed: Option<String>,
    /// Region: usa, germany or poland.
    #[arg(
        long,
        env = "IDENTITY_FORGE_REGION",
        value_name = "region",
        default_value = "usa"
    )]
    pub region: String,
    /// Expected typos per record; fractions are allowed.
    #[arg(
        long,
        env = "IDENTITY_FORGE_ERRORS",
        value_name = "rate",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub errors: f64,
    /// First record index (1-based).
    #[arg(
        long,
        env = "IDENTITY_FORGE_START",
        value_name = "index",
        default_value_t = 1
    )]
    pub start: u64,
    /// Number of records to generate.
    #[arg(
        long,
        env = "IDENTITY_FORGE_COUNT",
        value_name = "n",
        default_value_t = 20
    )]
    pub count: u64,
    /// Scroll page to generate; overrides --start and --count.
    #[arg(long, env = "IDENTITY_FORGE_PAGE", value_name = "page")]
    pub page: Option<u64>,
}

impl CliArgs {
    /// Resolves the index range to generate.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidPage`] for `--page 0`.
    pub fn index_range(&self) -> Result<IndexRange, SynthesisError> {
        match self.page {
            Some(page) => PagePlan::default().page(page),
            None => Ok(IndexRange {
                start: self.start,
                count: self.count,
            }),
        }
    }
}

/// The outcome of one CLI run.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Seed the batch was generated with.
    pub run_seed: RunSeed,
    /// Region the batch was generated for.
    pub region: Region,
    /// Records and per-record failures.
    pub batch: Batch,
}

/// Generates the batch described by the arguments.
///
/// # Errors
///
/// Returns [`CliError::Synthesis`] when the region is unknown, the error rate
/// is invalid, or the index range is invalid. Per-record failures do not fail
/// the run; they are reported in [`Generated::batch`].
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use identity_forge::cli::{CliArgs, run};
///
/// let args = CliArgs::try_parse_from([
///     "identity-forge", "--seed", "42", "--region", "germany", "--count", "3",
/// ])
/// .expect("valid arguments");
///
/// let generated = run(&args).expect("run succeeds");
/// assert_eq!(generated.batch.records().len(), 3);
/// ```
pub fn run(args: &CliArgs) -> Result<Generated, CliError> {
    let region: Region = args.region.parse()?;
    let range = args.index_range()?;
    let run_seed = args
        .seed
        .as_deref()
        .map_or_else(RunSeed::random, RunSeed::from);
    info!(
        seed = %run_seed,
        %region,
        start = range.start,
        count = range.count,
        errors = args.errors,
        "generating records"
    );

    let batch = RecordSynthesizer::default().generate_batch(
        range.start,
        range.count,
        region,
        args.errors,
        &run_seed,
    )?;
    Ok(Generated {
        run_seed,
        region,
        batch,
    })
}

/// Serializes records as JSON, one object per line.
///
/// # Errors
///
/// Returns [`CliError::Serialize`] if a record cannot be encoded.
pub fn render_json_lines(records: &[Record]) -> Result<String, CliError> {
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| CliError::Serialize {
            message: err.to_string(),
        })?;
    Ok(lines.join("\n"))
}

/// Errors surfaced by the CLI flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// Generation was rejected.
    #[error("generation failed: {source}")]
    Synthesis {
        /// Underlying synthesis error.
        #[from]
        #[source]
        source: SynthesisError,
    },
    /// A record could not be serialized.
    #[error("failed to serialize record: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
    /// Output could not be written.
    #[error("failed to write output: {message}")]
    Output {
        /// I/O error message.
        message: String,
    },
}
