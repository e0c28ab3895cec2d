//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to enable the steps you need");
        println!("2. Validate your configuration:");
        println!("   textnorm validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   textnorm process -i dict.txt -o dict_processed.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template with every key at its default value
    fn template() -> &'static str {
        r#"# textnorm configuration

[pipeline]
# Steps run in this order; each is skipped when false
lowercase = false
lemmatize = false
stem = false
remove_stop_words = false

# Token delimiter (regex). Empty tokens between delimiters are kept
# and disappear when whitespace is collapsed.
split_pattern = "[ ,.]"

# Every match is replaced by a single space
whitespace_collapse_pattern = "\\s+"

# Strip the leading/trailing space left by edge delimiters
trim_edges = true

[resources]
# Newline-delimited list replacing the built-in English stop words.
# Relative paths are resolved against this file's directory.
# stop_words_file = "stopwords.txt"

# Added on top of the active stop-word list
extra_stop_words = []

# "english" (Snowball/Porter2) or "porter"
stemmer = "english"

# Irregular forms for the lemmatizer: inflected = "lemma"
[resources.lemma_exceptions]
# oxen = "ox"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use textnorm_core::TextnormConfig;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("textnorm.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("textnorm.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config = TextnormConfig::from_toml_str(GenerateConfigArgs::template()).unwrap();
        assert_eq!(config, TextnormConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("textnorm.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[pipeline]"));
        assert!(content.contains("[resources]"));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/textnorm.toml"),
        };

        assert!(args.execute().is_err());
    }
}
