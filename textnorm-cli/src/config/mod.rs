//! Configuration resolution
//!
//! Builds a [`TextnormConfig`] from a config file or preset, then applies
//! command-line overrides on top. Every step has an on and an off switch,
//! so a flag can override the file in either direction.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use textnorm_core::{ConfigBuilder, PipelineConfig, TextnormConfig};

use crate::error::{CliError, CliResult};

/// Built-in pipeline presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Every step disabled: split, rejoin and collapse only
    Plain,
    /// Lowercase, lemmatize and stem; stop words are kept
    Dictionary,
}

impl Preset {
    fn config(self) -> PipelineConfig {
        match self {
            Preset::Plain => PipelineConfig::default(),
            Preset::Dictionary => PipelineConfig::dictionary(),
        }
    }
}

/// Pipeline options shared by commands that build a pipeline
#[derive(Debug, Default, Args)]
pub struct PipelineOptions {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Start from a built-in preset
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Lowercase text before splitting
    #[arg(long)]
    pub lowercase: bool,

    /// Do not lowercase, even if the config enables it
    #[arg(long, conflicts_with = "lowercase")]
    pub no_lowercase: bool,

    /// Reduce tokens to their dictionary base form
    #[arg(long)]
    pub lemmatize: bool,

    /// Do not lemmatize, even if the config enables it
    #[arg(long, conflicts_with = "lemmatize")]
    pub no_lemmatize: bool,

    /// Reduce tokens to their stem
    #[arg(long)]
    pub stem: bool,

    /// Do not stem, even if the config enables it
    #[arg(long, conflicts_with = "stem")]
    pub no_stem: bool,

    /// Drop stop words
    #[arg(long)]
    pub remove_stop_words: bool,

    /// Keep stop words, even if the config removes them
    #[arg(long, conflicts_with = "remove_stop_words")]
    pub keep_stop_words: bool,

    /// Token delimiter regex
    #[arg(long, value_name = "REGEX")]
    pub split_pattern: Option<String>,

    /// Regex whose matches collapse to a single space
    #[arg(long, value_name = "REGEX")]
    pub whitespace_pattern: Option<String>,

    /// Keep a leading or trailing space instead of trimming it
    #[arg(long)]
    pub keep_edges: bool,

    /// Newline-delimited stop-word list replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,
}

impl PipelineOptions {
    /// Resolve the effective configuration
    pub fn resolve(&self) -> CliResult<TextnormConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => TextnormConfig::from_file(path).map_err(|e| {
                CliError::ConfigError(format!("failed to load {}: {e}", path.display()))
            })?,
            (None, Some(preset)) => TextnormConfig {
                pipeline: preset.config(),
                ..TextnormConfig::default()
            },
            (None, None) => TextnormConfig::default(),
        };

        let mut builder = ConfigBuilder::from_config(&config.pipeline);
        if let Some(v) = switch(self.lowercase, self.no_lowercase) {
            builder = builder.lowercase(v);
        }
        if let Some(v) = switch(self.lemmatize, self.no_lemmatize) {
            builder = builder.lemmatize(v);
        }
        if let Some(v) = switch(self.stem, self.no_stem) {
            builder = builder.stem(v);
        }
        if let Some(v) = switch(self.remove_stop_words, self.keep_stop_words) {
            builder = builder.remove_stop_words(v);
        }
        if let Some(pattern) = &self.split_pattern {
            builder = builder.split_pattern(pattern.clone());
        }
        if let Some(pattern) = &self.whitespace_pattern {
            builder = builder.whitespace_collapse_pattern(pattern.clone());
        }
        if self.keep_edges {
            builder = builder.trim_edges(false);
        }
        config.pipeline = builder.build().map_err(CliError::from)?;

        if let Some(path) = &self.stop_words {
            config.resources.stop_words_file = Some(path.clone());
        }

        log::debug!("effective configuration: {config:?}");
        Ok(config)
    }
}

/// `Some(true)` for `--x`, `Some(false)` for `--no-x`, `None` to keep the base value
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
