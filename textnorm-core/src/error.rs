//! Error types for pipeline construction
//!
//! Normalization itself never fails; every error surfaces while the
//! pipeline is being built.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`TextPipeline`](crate::TextPipeline)
#[derive(Debug, Error)]
pub enum InitializationError {
    /// A pattern field was left empty
    #[error("pattern `{field}` must not be empty")]
    EmptyPattern {
        /// Name of the configuration field
        field: &'static str,
    },

    /// A pattern failed to compile
    #[error("invalid pattern `{pattern}` for `{field}`: {source}")]
    InvalidPattern {
        /// Name of the configuration field
        field: &'static str,
        /// The offending pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A linguistic resource could not be loaded
    #[error("failed to load {resource} from {}: {reason}", .path.display())]
    ResourceLoad {
        /// Which resource was being loaded
        resource: &'static str,
        /// Where it was loaded from
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// Requested stemming algorithm is not available
    #[error("unsupported stemmer: {0}")]
    UnsupportedStemmer(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for pipeline construction
pub type Result<T> = std::result::Result<T, InitializationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_display() {
        let error = InitializationError::EmptyPattern {
            field: "split_pattern",
        };
        assert_eq!(error.to_string(), "pattern `split_pattern` must not be empty");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("[unclosed").unwrap_err();
        let error = InitializationError::InvalidPattern {
            field: "split_pattern",
            pattern: "[unclosed".to_string(),
            source,
        };

        assert!(error.to_string().starts_with("invalid pattern `[unclosed`"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_resource_load_display() {
        let error = InitializationError::ResourceLoad {
            resource: "stop-word list",
            path: PathBuf::from("/missing/stopwords.txt"),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to load stop-word list from /missing/stopwords.txt: No such file or directory"
        );
    }

    #[test]
    fn test_unsupported_stemmer_display() {
        let error = InitializationError::UnsupportedStemmer("klingon".to_string());
        assert_eq!(error.to_string(), "unsupported stemmer: klingon");
    }
}
