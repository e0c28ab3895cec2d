//! Noun lemmatizer
//!
//! Morphy-style reduction of English plural nouns to their singular base
//! form: an irregular-form table is consulted first, then suffix
//! detachment rules are tried in order. There is no backing dictionary,
//! so the rules are guarded against words that only look plural
//! (`glass`, `status`, `analysis`, `specimen`).

use std::collections::HashMap;

/// Irregular plurals, checked before any suffix rule
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("data", "datum"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("alumni", "alumnus"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("thieves", "thief"),
    ("elves", "elf"),
];

/// Singular nouns ending in `-men`
const SINGULAR_MEN: &[&str] = &[
    "abdomen", "acumen", "amen", "cyclamen", "dolmen", "hymen", "lumen", "omen", "regimen",
    "rumen", "semen", "specimen", "stamen",
];

/// Suffix detachment rules, most specific first: `(suffix, replacement)`
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

/// Shortest word the suffix rules will touch
const MIN_RULE_LEN: usize = 4;

/// Lemmatizer for English nouns
#[derive(Debug, Clone)]
pub struct NounLemmatizer {
    exceptions: HashMap<String, String>,
}

impl Default for NounLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NounLemmatizer {
    /// Create a lemmatizer with the built-in irregular forms
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR_PLURALS
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
        }
    }

    /// Add or override irregular forms
    pub fn with_exceptions<I, K, V>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.exceptions.extend(
            exceptions
                .into_iter()
                .map(|(form, lemma)| (form.into(), lemma.into())),
        );
        self
    }

    /// Number of irregular forms known
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Reduce `word` to its base form, or return it unchanged
    ///
    /// Only all-lowercase alphabetic words go through the suffix rules.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        if !word.chars().all(|c| c.is_alphabetic() && c.is_lowercase()) {
            return word.to_string();
        }

        detach_suffix(word).unwrap_or_else(|| word.to_string())
    }
}

fn detach_suffix(word: &str) -> Option<String> {
    if word.chars().count() < MIN_RULE_LEN || looks_singular(word) {
        return None;
    }

    let (suffix, replacement) = DETACHMENT_RULES
        .iter()
        .find(|(suffix, _)| word.ends_with(suffix))?;
    let stem = &word[..word.len() - suffix.len()];

    // -ies on short words keeps the e: ties -> tie, pies -> pie
    if *suffix == "ies" && stem.chars().count() < 2 {
        return Some(format!("{stem}ie"));
    }

    Some(format!("{stem}{replacement}"))
}

fn looks_singular(word: &str) -> bool {
    word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
        || SINGULAR_MEN.contains(&word)
}
