//! Stop-word sets
//!
//! The built-in list is NLTK's English list from the `stop-words` crate
//! (`nltk` feature); custom lists are plain newline-delimited files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::{get, LANGUAGE};

use crate::error::{InitializationError, Result};

/// A read-only set of stop words with exact-match membership
///
/// Matching is case-sensitive: the built-in list is lowercase, so
/// capitalized tokens only match once the pipeline lowercases them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The built-in English list (NLTK, 179 words)
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a custom list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a newline-delimited list
    ///
    /// Surrounding whitespace is trimmed; blank lines and lines starting
    /// with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| InitializationError::ResourceLoad {
            resource: "stop-word list",
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let set = Self::parse(&content);
        if set.is_empty() {
            log::warn!("stop-word list {} contains no words", path.display());
        }
        Ok(set)
    }

    fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Add additional stop words
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    /// Check if a word is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_list_has_common_words() {
        let set = StopWordSet::english();
        for word in ["a", "an", "the", "and", "of"] {
            assert!(set.contains(word), "missing stop word {word}");
        }
        assert!(!set.contains("dictionary"));
    }

    #[test]
    fn test_english_list_is_nltk() {
        let set = StopWordSet::english();
        assert_eq!(set.len(), 179);
        for word in ["world", "hello", "information", "system", "new", "home"] {
            assert!(!set.contains(word), "content word {word} listed as stop word");
        }
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let set = StopWordSet::from_words(["the"]);
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let set = StopWordSet::parse("# header\nfoo\n\n  bar  \n#baz\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert!(!set.contains("#baz"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta").unwrap();

        let set = StopWordSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("beta"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StopWordSet::from_file(Path::new("/nonexistent/stop.txt")).unwrap_err();
        assert!(matches!(
            err,
            InitializationError::ResourceLoad {
                resource: "stop-word list",
                ..
            }
        ));
    }

    #[test]
    fn test_extend() {
        let mut set = StopWordSet::empty();
        assert!(set.is_empty());
        set.extend(["x", "y"]);
        assert_eq!(set.len(), 2);
    }
}
