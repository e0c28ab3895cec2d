//! Linguistic resources used by the pipeline
//!
//! The pipeline only talks to resources through [`LinguisticResources`],
//! so any stemmer/lemmatizer/stop-word source can be plugged in. The
//! built-in English implementation is [`EnglishResources`].

pub mod interface;

pub(crate) mod config;
pub(crate) mod english;
pub(crate) mod lemmatizer;
pub(crate) mod stopwords;

pub use config::{ResourceSpec, StemmerKind};
pub use english::EnglishResources;
pub use interface::*;
pub use lemmatizer::NounLemmatizer;
pub use stopwords::StopWordSet;
