//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize and deduplicate dictionary lines
    Process(process::ProcessArgs),

    /// Check that a configuration file builds a working pipeline
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("textnorm.toml"),
        });

        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("textnorm.toml"));
    }

    #[test]
    fn test_generate_config_dispatch() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output = temp_dir.path().join("textnorm.toml");

        let cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: output.clone(),
        });

        assert!(cmd.execute().is_ok());
        assert!(output.exists());
    }
}
