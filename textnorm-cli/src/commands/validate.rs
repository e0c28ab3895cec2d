//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textnorm_core::{TextPipeline, TextnormConfig};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result =
            TextnormConfig::from_file(&self.config).and_then(|config| TextPipeline::from_config(&config));

        match result {
            Ok(pipeline) => {
                let config = pipeline.config();
                println!("✓ Configuration is valid!");
                println!("  lowercase:         {}", config.lowercase());
                println!("  lemmatize:         {}", config.lemmatize());
                println!("  stem:              {}", config.stem());
                println!("  remove_stop_words: {}", config.remove_stop_words());
                println!("  split_pattern:     {}", config.split_pattern());
                println!(
                    "  whitespace:        {}",
                    config.whitespace_collapse_pattern()
                );
                println!("  trim_edges:        {}", config.trim_edges());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
