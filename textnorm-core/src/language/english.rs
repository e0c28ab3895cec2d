//! Built-in English resources

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

use crate::error::Result;
use crate::language::{LinguisticResources, NounLemmatizer, ResourceSpec, StemmerKind, StopWordSet};

/// Snowball stemmer, noun lemmatizer and an English stop-word list
pub struct EnglishResources {
    stemmer: Stemmer,
    stemmer_kind: StemmerKind,
    lemmatizer: NounLemmatizer,
    stop_words: StopWordSet,
}

impl EnglishResources {
    /// Resources with the built-in stop-word list and irregular forms
    pub fn new() -> Self {
        Self {
            stemmer: create_stemmer(StemmerKind::English),
            stemmer_kind: StemmerKind::English,
            lemmatizer: NounLemmatizer::new(),
            stop_words: StopWordSet::english(),
        }
    }

    /// Build resources according to a `[resources]` table
    ///
    /// Fails if the stop-word file cannot be read.
    pub fn from_spec(spec: &ResourceSpec) -> Result<Self> {
        let mut stop_words = match &spec.stop_words_file {
            Some(path) => StopWordSet::from_file(path)?,
            None => StopWordSet::english(),
        };
        stop_words.extend(spec.extra_stop_words.iter().cloned());

        let lemmatizer = NounLemmatizer::new().with_exceptions(spec.lemma_exceptions.clone());

        log::debug!(
            "loaded English resources: stemmer={:?}, {} stop words, {} irregular forms",
            spec.stemmer,
            stop_words.len(),
            lemmatizer.exception_count()
        );

        Ok(Self {
            stemmer: create_stemmer(spec.stemmer),
            stemmer_kind: spec.stemmer,
            lemmatizer,
            stop_words,
        })
    }

    /// Replace the stop-word set
    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }
}

impl Default for EnglishResources {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnglishResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnglishResources")
            .field("stemmer", &self.stemmer_kind)
            .field("lemmatizer", &self.lemmatizer)
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

fn create_stemmer(kind: StemmerKind) -> Stemmer {
    match kind {
        // rust-stemmers ships Porter2 only; both map onto it
        StemmerKind::English | StemmerKind::Porter => Stemmer::create(Algorithm::English),
    }
}

impl LinguisticResources for EnglishResources {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn lemmatize(&self, word: &str) -> String {
        self.lemmatizer.lemmatize(word)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
