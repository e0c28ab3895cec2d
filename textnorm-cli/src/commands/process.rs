//! Process command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use textnorm_core::TextPipeline;

use crate::config::PipelineOptions;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{write_lines, DictionaryAssembler};
use crate::progress::ProgressReporter;

/// Lines normalized between progress updates
const BATCH_LINES: usize = 1024;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub pipeline: PipelineOptions,

    /// Write only the deduplicated normalized lines, without the originals
    #[arg(long)]
    pub no_originals: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting dictionary normalization");
        log::debug!("Arguments: {:?}", self);

        let config = self.pipeline.resolve()?;
        let pipeline = TextPipeline::from_config(&config)
            .map_err(CliError::from)
            .context("Failed to initialize pipeline")?;

        let files = resolve_patterns(&self.input)?;
        let mut lines = Vec::new();
        for file in &files {
            let file_lines = FileReader::read_lines(file)?;
            log::info!("Read {} lines from {}", file_lines.len(), file.display());
            lines.extend(file_lines);
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_lines(lines.len() as u64);

        let mut assembler = DictionaryAssembler::new();
        for batch in lines.chunks(BATCH_LINES) {
            assembler.extend(pipeline.normalize_all(batch));
            progress.lines_completed(batch.len() as u64);
        }

        log::info!(
            "{} lines normalized, {} distinct",
            assembler.total(),
            assembler.unique()
        );

        let originals = if self.no_originals { None } else { Some(lines) };
        let output = assembler.finish(originals);

        log::info!("Writing {} lines", output.len());
        write_lines(&output, self.output.as_deref())?;
        progress.finish(format!("{} lines written", output.len()));

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // a logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
