//! Resource configuration
//!
//! TOML schema for the `[resources]` table: where stop words come from,
//! extra irregular forms for the lemmatizer and which stemmer to use.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InitializationError;

/// Stemming algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Snowball English (Porter2)
    #[default]
    English,
    /// Original Porter algorithm, mapped onto Snowball English
    Porter,
}

impl FromStr for StemmerKind {
    type Err = InitializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" | "snowball" => Ok(StemmerKind::English),
            "porter" => Ok(StemmerKind::Porter),
            other => Err(InitializationError::UnsupportedStemmer(other.to_string())),
        }
    }
}

/// Customization of the built-in English resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceSpec {
    /// Replaces the built-in stop-word list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_words_file: Option<PathBuf>,

    /// Added on top of the active stop-word list
    pub extra_stop_words: Vec<String>,

    /// Extra irregular forms for the lemmatizer, `inflected = "lemma"`
    pub lemma_exceptions: BTreeMap<String, String>,

    pub stemmer: StemmerKind,
}

impl ResourceSpec {
    /// Resolve a relative stop-word path against `base`
    pub(crate) fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(path) = &self.stop_words_file {
            if path.is_relative() {
                self.stop_words_file = Some(base.join(path));
            }
        }
    }
}
