//! Public contract for linguistic resources

/// Stemmer, lemmatizer and stop-word membership behind one narrow interface
///
/// Implementations must be free of mutable state across calls: a single
/// instance is shared by every caller of the pipeline.
pub trait LinguisticResources: Send + Sync + 'static {
    /// Heuristic root form of `word`
    fn stem(&self, word: &str) -> String;

    /// Dictionary base form of `word`; unknown words come back unchanged
    fn lemmatize(&self, word: &str) -> String;

    /// Membership test against the stop-word set
    fn is_stop_word(&self, word: &str) -> bool;
}
