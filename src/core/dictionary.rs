// File: src/core/dictionary.rs
use crate::error::CorpusError;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// The read-only word corpus the filter draws from.
///
/// Words are kept in a `BTreeSet` so iteration is lexicographic and
/// generation results are reproducible for a given corpus snapshot.
/// Built once at start-up through [`Dictionary::load`] and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
    stopwords: HashSet<String>,
}

impl Dictionary {
    pub fn new<W, S>(words: W, stopwords: S) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            stopwords: stopwords.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads both corpus files (one entry per line, blank lines ignored).
    /// A missing, unreadable or empty word list is an initialization failure.
    pub fn load(words_path: &Path, stopwords_path: &Path) -> Result<Self, CorpusError> {
        let words: BTreeSet<String> = read_entries(words_path)?.into_iter().collect();
        if words.is_empty() {
            return Err(CorpusError::Empty(words_path.to_path_buf()));
        }
        let stopwords: HashSet<String> = read_entries(stopwords_path)?.into_iter().collect();

        info!(
            words = words.len(),
            stopwords = stopwords.len(),
            "Loaded corpus from {}",
            words_path.display()
        );
        Ok(Self { words, stopwords })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Iterates the words in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
