//! The normalization pipeline
//!
//! Steps run in a fixed order, each one gated by its configuration flag:
//!
//! 1. lowercase
//! 2. split on `split_pattern` (empty tokens are kept)
//! 3. lemmatize every token
//! 4. stem every token
//! 5. drop stop words
//! 6. join with single spaces
//! 7. collapse whitespace runs (twice), then trim edges if configured

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::config::{PipelineConfig, TextnormConfig};
use crate::error::Result;
use crate::language::{EnglishResources, LinguisticResources};

/// A configured text normalizer
///
/// All state is read-only after construction, so one pipeline can be
/// shared between threads.
pub struct TextPipeline {
    config: PipelineConfig,
    split: Regex,
    whitespace: Regex,
    resources: Arc<dyn LinguisticResources>,
}

impl TextPipeline {
    /// Create a pipeline backed by the built-in English resources
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_resources(config, Arc::new(EnglishResources::new()))
    }

    /// Create a pipeline with injected linguistic resources
    pub fn with_resources(
        config: PipelineConfig,
        resources: Arc<dyn LinguisticResources>,
    ) -> Result<Self> {
        let (split, whitespace) = config.compile_patterns()?;

        log::debug!(
            "pipeline ready: lowercase={} lemmatize={} stem={} remove_stop_words={} split={:?} whitespace={:?}",
            config.lowercase,
            config.lemmatize,
            config.stem,
            config.remove_stop_words,
            config.split_pattern,
            config.whitespace_collapse_pattern
        );

        Ok(Self {
            config,
            split,
            whitespace,
            resources,
        })
    }

    /// Create a pipeline from a parsed configuration file
    pub fn from_config(config: &TextnormConfig) -> Result<Self> {
        let resources = EnglishResources::from_spec(&config.resources)?;
        Self::with_resources(config.pipeline.clone(), Arc::new(resources))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Normalize one line of text
    pub fn normalize(&self, text: &str) -> String {
        let lowered;
        let text = if self.config.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let mut tokens = self.tokenize(text);
        if self.config.lemmatize {
            tokens = self.lemmatize_tokens(tokens);
        }
        if self.config.stem {
            tokens = self.stem_tokens(tokens);
        }
        if self.config.remove_stop_words {
            tokens = self.remove_stop_words(tokens);
        }

        let joined = tokens.join(" ");
        // the second pass only matters for patterns that are not idempotent
        let collapsed = self.collapse_whitespace(&self.collapse_whitespace(&joined));

        let normalized = if self.config.trim_edges {
            collapsed.trim().to_string()
        } else {
            collapsed
        };

        log::trace!("normalized {text:?} -> {normalized:?}");
        normalized
    }

    /// Normalize many lines, preserving order
    #[cfg(feature = "parallel")]
    pub fn normalize_all<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<String> {
        use rayon::prelude::*;

        lines
            .par_iter()
            .map(|line| self.normalize(line.as_ref()))
            .collect()
    }

    /// Normalize many lines, preserving order
    #[cfg(not(feature = "parallel"))]
    pub fn normalize_all<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.normalize(line.as_ref()))
            .collect()
    }

    /// Split on the delimiter pattern, keeping empty tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.split.split(text).map(str::to_string).collect()
    }

    /// Replace every token with its lemma
    pub fn lemmatize_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.resources.lemmatize(token))
            .collect()
    }

    /// Replace every token with its stem
    pub fn stem_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.resources.stem(token))
            .collect()
    }

    /// Drop stop words, keeping the order of the rest
    pub fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.resources.is_stop_word(token))
            .collect()
    }

    /// Replace every whitespace-pattern match with a single space
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").into_owned()
    }
}

impl fmt::Debug for TextPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
