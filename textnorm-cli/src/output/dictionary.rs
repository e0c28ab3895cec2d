//! Deduplication of normalized dictionary lines

use std::collections::HashSet;

/// Collects normalized lines, dropping repeats
///
/// The first occurrence of each normalized line wins and keeps its
/// position. Original lines, when included, follow the deduplicated
/// block unchanged and are not deduplicated.
#[derive(Debug, Default)]
pub struct DictionaryAssembler {
    seen: HashSet<String>,
    normalized: Vec<String>,
    total: usize,
}

impl DictionaryAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add normalized lines in input order
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        for line in lines {
            self.total += 1;
            if self.seen.insert(line.clone()) {
                self.normalized.push(line);
            }
        }
    }

    /// Number of normalized lines added, including duplicates
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct normalized lines
    pub fn unique(&self) -> usize {
        self.normalized.len()
    }

    /// Deduplicated normalized lines, followed by `originals` if given
    pub fn finish(self, originals: Option<Vec<String>>) -> Vec<String> {
        let mut lines = self.normalized;
        if let Some(originals) = originals {
            lines.extend(originals);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut assembler = DictionaryAssembler::new();
        assembler.extend(strings(&["cat", "dog", "cat", "bird", "dog"]));

        assert_eq!(assembler.total(), 5);
        assert_eq!(assembler.unique(), 3);
        assert_eq!(assembler.finish(None), strings(&["cat", "dog", "bird"]));
    }

    #[test]
    fn test_originals_appended_verbatim() {
        let mut assembler = DictionaryAssembler::new();
        assembler.extend(strings(&["cat", "cat"]));

        let lines = assembler.finish(Some(strings(&["Cat", "cat "])));
        assert_eq!(lines, strings(&["cat", "Cat", "cat "]));
    }

    #[test]
    fn test_extend_across_batches() {
        let mut assembler = DictionaryAssembler::new();
        assembler.extend(strings(&["a", "b"]));
        assembler.extend(strings(&["b", "c"]));

        assert_eq!(assembler.finish(None), strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_empty() {
        let assembler = DictionaryAssembler::new();
        assert_eq!(assembler.total(), 0);
        assert!(assembler.finish(None).is_empty());
    }
}
