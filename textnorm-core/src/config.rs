//! Pipeline configuration
//!
//! [`PipelineConfig`] holds the step flags and the two patterns that drive
//! [`TextPipeline`](crate::TextPipeline). [`TextnormConfig`] is the on-disk
//! TOML form, pairing a `[pipeline]` table with a `[resources]` table.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{InitializationError, Result};
use crate::language::ResourceSpec;

/// Default configuration constants
pub mod defaults {
    /// Splits on space, comma and period
    pub const SPLIT_PATTERN: &str = r"[ ,.]";

    /// One or more whitespace characters
    pub const WHITESPACE_COLLAPSE_PATTERN: &str = r"\s+";
}

/// Step flags and patterns for a normalization pipeline
///
/// Any combination of flags is valid. Both patterns must be non-empty,
/// compilable regular expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub(crate) lowercase: bool,
    pub(crate) lemmatize: bool,
    pub(crate) stem: bool,
    pub(crate) remove_stop_words: bool,
    pub(crate) split_pattern: String,
    pub(crate) whitespace_collapse_pattern: String,
    pub(crate) trim_edges: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lowercase: false,
            lemmatize: false,
            stem: false,
            remove_stop_words: false,
            split_pattern: defaults::SPLIT_PATTERN.to_string(),
            whitespace_collapse_pattern: defaults::WHITESPACE_COLLAPSE_PATTERN.to_string(),
            trim_edges: true,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Options used for building the processed dictionary:
    /// lowercase, lemmatize and stem, keeping stop words.
    pub fn dictionary() -> Self {
        Self {
            lowercase: true,
            lemmatize: true,
            stem: true,
            ..Self::default()
        }
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn lemmatize(&self) -> bool {
        self.lemmatize
    }

    pub fn stem(&self) -> bool {
        self.stem
    }

    pub fn remove_stop_words(&self) -> bool {
        self.remove_stop_words
    }

    pub fn split_pattern(&self) -> &str {
        &self.split_pattern
    }

    pub fn whitespace_collapse_pattern(&self) -> &str {
        &self.whitespace_collapse_pattern
    }

    /// Whether leading and trailing whitespace is stripped after collapsing
    pub fn trim_edges(&self) -> bool {
        self.trim_edges
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.compile_patterns().map(|_| ())
    }

    /// Compile `(split, whitespace)` patterns
    pub(crate) fn compile_patterns(&self) -> Result<(Regex, Regex)> {
        let split = compile("split_pattern", &self.split_pattern)?;
        let whitespace = compile(
            "whitespace_collapse_pattern",
            &self.whitespace_collapse_pattern,
        )?;
        Ok((split, whitespace))
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(InitializationError::EmptyPattern { field });
    }

    Regex::new(pattern).map_err(|source| InitializationError::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        source,
    })
}

/// Fluent builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lowercase: Option<bool>,
    lemmatize: Option<bool>,
    stem: Option<bool>,
    remove_stop_words: Option<bool>,
    split_pattern: Option<String>,
    whitespace_collapse_pattern: Option<String>,
    trim_edges: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration; unset builder values keep its settings
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            lowercase: Some(config.lowercase),
            lemmatize: Some(config.lemmatize),
            stem: Some(config.stem),
            remove_stop_words: Some(config.remove_stop_words),
            split_pattern: Some(config.split_pattern.clone()),
            whitespace_collapse_pattern: Some(config.whitespace_collapse_pattern.clone()),
            trim_edges: Some(config.trim_edges),
        }
    }

    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = Some(enabled);
        self
    }

    pub fn lemmatize(mut self, enabled: bool) -> Self {
        self.lemmatize = Some(enabled);
        self
    }

    pub fn stem(mut self, enabled: bool) -> Self {
        self.stem = Some(enabled);
        self
    }

    pub fn remove_stop_words(mut self, enabled: bool) -> Self {
        self.remove_stop_words = Some(enabled);
        self
    }

    /// Set the token delimiter pattern
    pub fn split_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.split_pattern = Some(pattern.into());
        self
    }

    /// Set the pattern whose matches are collapsed to a single space
    pub fn whitespace_collapse_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.whitespace_collapse_pattern = Some(pattern.into());
        self
    }

    pub fn trim_edges(mut self, enabled: bool) -> Self {
        self.trim_edges = Some(enabled);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::default();

        if let Some(v) = self.lowercase {
            config.lowercase = v;
        }
        if let Some(v) = self.lemmatize {
            config.lemmatize = v;
        }
        if let Some(v) = self.stem {
            config.stem = v;
        }
        if let Some(v) = self.remove_stop_words {
            config.remove_stop_words = v;
        }
        if let Some(pattern) = self.split_pattern {
            config.split_pattern = pattern;
        }
        if let Some(pattern) = self.whitespace_collapse_pattern {
            config.whitespace_collapse_pattern = pattern;
        }
        if let Some(v) = self.trim_edges {
            config.trim_edges = v;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Root of a TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextnormConfig {
    pub pipeline: PipelineConfig,
    pub resources: ResourceSpec,
}

impl TextnormConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| InitializationError::Configuration(e.to_string()))
    }

    /// Load a configuration file
    ///
    /// Relative resource paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| InitializationError::ResourceLoad {
            resource: "configuration file",
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.resources.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| InitializationError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert!(!config.lowercase());
        assert!(!config.lemmatize());
        assert!(!config.stem());
        assert!(!config.remove_stop_words());
        assert_eq!(config.split_pattern(), "[ ,.]");
        assert_eq!(config.whitespace_collapse_pattern(), r"\s+");
        assert!(config.trim_edges());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dictionary_preset() {
        let config = PipelineConfig::dictionary();
        assert!(config.lowercase());
        assert!(config.lemmatize());
        assert!(config.stem());
        assert!(!config.remove_stop_words());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = PipelineConfig::builder()
            .lowercase(true)
            .remove_stop_words(true)
            .split_pattern(r"[\s;]")
            .trim_edges(false)
            .build()
            .unwrap();

        assert!(config.lowercase());
        assert!(!config.stem());
        assert!(config.remove_stop_words());
        assert_eq!(config.split_pattern(), r"[\s;]");
        assert!(!config.trim_edges());
    }

    #[test]
    fn test_builder_from_config_keeps_values() {
        let base = PipelineConfig::dictionary();
        let config = ConfigBuilder::from_config(&base).stem(false).build().unwrap();

        assert!(config.lowercase());
        assert!(config.lemmatize());
        assert!(!config.stem());
    }

    #[test]
    fn test_empty_split_pattern_rejected() {
        let err = PipelineConfig::builder().split_pattern("").build().unwrap_err();
        assert!(matches!(
            err,
            InitializationError::EmptyPattern {
                field: "split_pattern"
            }
        ));
    }

    #[test]
    fn test_empty_whitespace_pattern_rejected() {
        let err = PipelineConfig::builder()
            .whitespace_collapse_pattern("")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            InitializationError::EmptyPattern {
                field: "whitespace_collapse_pattern"
            }
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = PipelineConfig::builder()
            .split_pattern("[ ,.")
            .build()
            .unwrap_err();
        match err {
            InitializationError::InvalidPattern { field, pattern, .. } => {
                assert_eq!(field, "split_pattern");
                assert_eq!(pattern, "[ ,.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_toml_partial_table_uses_defaults() {
        let config = TextnormConfig::from_toml_str(
            r#"
[pipeline]
lowercase = true
stem = true
"#,
        )
        .unwrap();

        assert!(config.pipeline.lowercase());
        assert!(config.pipeline.stem());
        assert!(!config.pipeline.lemmatize());
        assert_eq!(config.pipeline.split_pattern(), "[ ,.]");
        assert_eq!(config.resources, ResourceSpec::default());
    }

    #[test]
    fn test_toml_unknown_key_rejected() {
        let err = TextnormConfig::from_toml_str("[pipeline]\nlower_case = true\n").unwrap_err();
        assert!(matches!(err, InitializationError::Configuration(_)));
    }

    #[test]
    fn test_toml_roundtrip_preserves_config() {
        let config = TextnormConfig {
            pipeline: PipelineConfig::dictionary(),
            resources: ResourceSpec::default(),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(TextnormConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_file_resolves_relative_stop_word_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[resources]\nstop_words_file = \"words.txt\"\n").unwrap();

        let config = TextnormConfig::from_file(file.path()).unwrap();
        let resolved = config.resources.stop_words_file.unwrap();
        assert_eq!(resolved, file.path().parent().unwrap().join("words.txt"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = TextnormConfig::from_file(Path::new("/nonexistent/textnorm.toml")).unwrap_err();
        assert!(matches!(
            err,
            InitializationError::ResourceLoad {
                resource: "configuration file",
                ..
            }
        ));
    }
}
