// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;

/// The letters available for building words.
/// Always lowercase, deduplicated and sorted; built by `extract_letters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Wraps letters that are already sorted and unique.
    pub(crate) fn from_sorted(letters: Vec<char>) -> Self {
        debug_assert!(letters.windows(2).all(|w| w[0] < w[1]));
        Self { letters }
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.binary_search(&c).is_ok()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }
}

impl Deref for LetterSet {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.letters)
    }
}

/// Constraints applied by the word filter.
/// The defaults match a plain `generate_words` call: 3..=7 letters, 50 words,
/// repeats and stopwords allowed, nothing blacklisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub min_length: usize,
    pub max_length: usize,
    /// Upper bound on the number of words returned.
    pub result_count: usize,
    pub allow_repeats: bool,
    pub allow_stopwords: bool,
    pub blacklist: BTreeSet<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 7,
            result_count: 50,
            allow_repeats: true,
            allow_stopwords: true,
            blacklist: BTreeSet::new(),
        }
    }
}

impl GenerationParams {
    pub fn with_blacklist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn length_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_length..=self.max_length
    }
}
