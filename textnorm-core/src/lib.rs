//! Configurable text normalization
//!
//! A [`TextPipeline`] turns one line of text into a normalized line by
//! running a fixed sequence of optional steps: lowercasing, splitting on a
//! delimiter pattern, lemmatization, stemming, stop-word removal and
//! whitespace collapsing. Patterns are compiled and linguistic resources
//! loaded once, at construction; [`TextPipeline::normalize`] itself cannot
//! fail.
//!
//! # Example
//!
//! ```rust
//! use textnorm_core::{PipelineConfig, TextPipeline};
//!
//! let config = PipelineConfig::builder()
//!     .lowercase(true)
//!     .remove_stop_words(true)
//!     .build()
//!     .unwrap();
//! let pipeline = TextPipeline::new(config).unwrap();
//!
//! assert_eq!(pipeline.normalize("The Cat, the Hat."), "cat hat");
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod pipeline;

pub use config::{ConfigBuilder, PipelineConfig, TextnormConfig};
pub use error::{InitializationError, Result};
pub use language::{
    EnglishResources, LinguisticResources, NounLemmatizer, ResourceSpec, StemmerKind,
    StopWordSet,
};
pub use pipeline::TextPipeline;
