//! Output assembly and writing

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod dictionary;

pub use dictionary::DictionaryAssembler;

/// Write lines joined by `\n`, without a trailing newline
///
/// Writes to `path` when given, otherwise to stdout.
pub fn write_lines(lines: &[String], path: Option<&Path>) -> Result<()> {
    let content = lines.join("\n");

    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_lines_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_lines(&["cat".to_string(), "dog".to_string()], Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\ndog");
    }

    #[test]
    fn test_write_lines_to_missing_directory() {
        let err = write_lines(&[], Some(Path::new("/nonexistent/dir/out.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
